use criterion::{Criterion, criterion_group, criterion_main};
use metrodash::{feed::FeedProject, prelude::*};
use std::{hint::black_box, time::Duration};

const REGIONS: [&str; 4] = ["India", "Asia", "Europe", "Americas"];
const STATUSES: [&str; 4] = ["operational", "under_construction", "planned", "delayed"];
const INVESTMENTS: [&str; 4] = ["$3.2B", "€5.3B", "SGD 5.7B", "TBD"];

fn synthetic(count: u32) -> Vec<Project> {
    (0..count)
        .map(|id| {
            let i = id as usize;
            FeedProject {
                id,
                name: format!("Line {id}"),
                city: format!("City {}", id % 97),
                country: REGIONS[i % 4].into(),
                region: REGIONS[i % 4].into(),
                status: STATUSES[i % 3].into(),
                length_km: f64::from(id % 50) + 0.25,
                no_of_stations: (id % 5 != 0).then_some(id % 40),
                investment: INVESTMENTS[i % 4].into(),
                from_station: None,
                to_station: None,
                operational_year: Some(2000 + (id % 25) as i32),
                completion_year: None,
                line_number: Some(id % 12),
                line_color: None,
                description: String::new(),
            }
            .into()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let projects = synthetic(100_000);
    let criteria = FilterCriteria::new()
        .with_region("Europe")
        .with_search("city 4")
        .with_status(Status::Operational);

    let mut group = c.benchmark_group("Dashboard");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Summary 100k", |b| {
        b.iter(|| black_box(compute_summary(&projects)))
    });

    group.bench_function("Filter 100k", |b| {
        b.iter(|| black_box(filter_projects(&projects, &criteria)))
    });

    group.bench_function("Embedded load", |b| {
        b.iter(|| black_box(LoadedData::load(&FeedReader::new())))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
