use coptic_liturgy::{easter_date, liturgical_season_for_date, season_calendar_for_year};
use coptic_time::GregorianDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_liturgy(c: &mut Criterion) {
    let date = GregorianDate::new(2025, 4, 15).unwrap();

    c.bench_function("easter_date", |b| b.iter(|| easter_date(black_box(2025))));
    c.bench_function("season_calendar_for_year", |b| {
        b.iter(|| season_calendar_for_year(black_box(2025)))
    });
    c.bench_function("liturgical_season_for_date", |b| {
        b.iter(|| liturgical_season_for_date(black_box(date)))
    });
}

criterion_group!(benches, bench_liturgy);
criterion_main!(benches);
