use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scanview_core::input::{grep, xml};
use std::hint::black_box;

fn xml_report(hosts: usize) -> String {
    let mut doc = String::from("<?xml version=\"1.0\"?>\n<!DOCTYPE nmaprun>\n<nmaprun>\n");
    for h in 0..hosts {
        doc.push_str(&format!(
            "<host><address addr=\"10.0.{}.{}\" addrtype=\"ipv4\"/><ports>",
            h / 256,
            h % 256
        ));
        for port in [22, 80, 443, 8080] {
            doc.push_str(&format!(
                "<port protocol=\"tcp\" portid=\"{}\"><state state=\"open\"/><service name=\"svc{}\"/></port>",
                port, port
            ));
        }
        doc.push_str("</ports></host>\n");
    }
    doc.push_str("</nmaprun>\n");
    doc
}

fn text_report(hosts: usize) -> String {
    let mut doc = String::new();
    for h in 0..hosts {
        doc.push_str(&format!(
            "Nmap scan report for 10.0.{}.{}\nHost is up.\nPORT     STATE  SERVICE\n",
            h / 256,
            h % 256
        ));
        for port in [22, 80, 443, 8080] {
            doc.push_str(&format!("{}/tcp   open   svc{}\n", port, port));
        }
        doc.push_str("25/tcp   closed smtp\n\n");
    }
    doc
}

fn bench_xml_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("xml_parse");

    for hosts in [1, 100, 1000] {
        let doc = xml_report(hosts);
        group.bench_with_input(BenchmarkId::from_parameter(hosts), &doc, |b, doc| {
            b.iter(|| black_box(xml::parse(black_box(doc)).len()))
        });
    }

    group.finish();
}

fn bench_text_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_parse");

    for hosts in [1, 100, 1000] {
        let doc = text_report(hosts);
        group.bench_with_input(BenchmarkId::from_parameter(hosts), &doc, |b, doc| {
            b.iter(|| black_box(grep::parse(black_box(doc)).len()))
        });
    }

    group.finish();
}

fn bench_malformed_xml(c: &mut Criterion) {
    let doc = xml_report(100);
    let truncated = &doc[..doc.len() - 20];
    c.bench_function("xml_parse_malformed", |b| {
        b.iter(|| black_box(xml::parse(black_box(truncated)).len()))
    });
}

criterion_group!(benches, bench_xml_parse, bench_text_parse, bench_malformed_xml);

criterion_main!(benches);
