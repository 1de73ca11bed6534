use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recoder_core::{translate, Profile};

/// Build a Java program with `lines` print statements
fn java_program(lines: usize) -> String {
    let mut code = String::from("public class Bench {\n");
    code.push_str("public static void main(String[] args) {\n");
    for i in 0..lines {
        code.push_str(&format!("System.out.println(\"line {i}\");\n"));
    }
    code.push_str("}\n}");
    code
}

/// Build a C++ program with `lines` stream statements
fn cpp_program(lines: usize) -> String {
    let mut code = String::from("#include <iostream>\nint main() {\n");
    for i in 0..lines {
        code.push_str(&format!("std::cout << {i} << std::endl;\n"));
    }
    code.push('}');
    code
}

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");

    for lines in [10, 100, 1000].iter() {
        let code = java_program(*lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), lines, |b, _| {
            b.iter(|| {
                let result =
                    translate(black_box(&code), &Profile::Java, &Profile::Java).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite");

    for lines in [10, 100, 1000].iter() {
        let java = java_program(*lines);
        group.bench_with_input(BenchmarkId::new("java_to_cpp", lines), lines, |b, _| {
            b.iter(|| {
                let result = translate(black_box(&java), &Profile::Java, &Profile::Cpp).unwrap();
                black_box(result);
            });
        });

        let cpp = cpp_program(*lines);
        group.bench_with_input(BenchmarkId::new("cpp_to_js", lines), lines, |b, _| {
            b.iter(|| {
                let result = translate(black_box(&cpp), &Profile::Cpp, &Profile::Js).unwrap();
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_validation_failure(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation_failure");

    let code = "int main(){}";
    group.bench_function("missing_class", |b| {
        b.iter(|| {
            let result = translate(black_box(code), &Profile::Java, &Profile::Js).unwrap();
            black_box(result);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_identity,
    bench_rewrite,
    bench_validation_failure
);
criterion_main!(benches);
