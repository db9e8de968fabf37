//! Performance benchmarks for the Admission Allocation Engine.
//!
//! Measures the fifteen-round allocation over synthetic rosters and the
//! rendering of a full course list.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use admission_engine::allocation::allocate;
use admission_engine::models::{Applicant, Course, Enrollment, Grades};
use admission_engine::output::format_course_list;

const COURSES: [&str; 5] = ["Biotech", "Chemistry", "Engineering", "Mathematics", "Physics"];

/// Builds a deterministic roster of `count` applicants with spread-out grades.
fn create_roster(count: usize) -> Vec<Applicant> {
    (0..count)
        .map(|i| Applicant {
            first_name: format!("First{}", i % 97),
            last_name: format!("Last{i}"),
            preferences: [
                COURSES[i % 5].to_string(),
                COURSES[(i + 1) % 5].to_string(),
                COURSES[(i + 3) % 5].to_string(),
            ],
            grades: Grades {
                physics: ((i * 37) % 101) as f64,
                chemistry: ((i * 53) % 101) as f64,
                maths: ((i * 71) % 101) as f64,
                computer_science: ((i * 89) % 101) as f64,
                admission_score: ((i * 13) % 101) as f64,
            },
            enrolled: false,
        })
        .collect()
}

/// Benchmark: allocation across roster sizes, capacity a tenth of the roster.
fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");

    for size in [100usize, 1_000, 10_000] {
        let roster = create_roster(size);
        let capacity = size / 10;
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(allocate(roster.clone(), capacity)))
        });
    }

    group.finish();
}

/// Benchmark: re-ranking and formatting a 1,000-applicant course list.
fn bench_format_course_list(c: &mut Criterion) {
    let enrollment = Enrollment {
        course: Course::Engineering,
        applicants: create_roster(1_000),
    };

    c.bench_function("format_course_list_1000", |b| {
        b.iter(|| black_box(format_course_list(&enrollment)))
    });
}

criterion_group!(benches, bench_allocate, bench_format_course_list);
criterion_main!(benches);
