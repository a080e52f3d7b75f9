// benches/ability.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;

use ba_scrape::core::{FragmentBag, SelectorMap, Slot};
use ba_scrape::specs::ability::parse_ability;
use ba_scrape::specs::upgrade::{merge_upgrades, parse_upgrades};

fn load_sample() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/Alice.html"))
        .expect("read tests/fixtures/Alice.html")
}

fn bench_ability(c: &mut Criterion) {
    let doc = Html::parse_document(&load_sample());
    let selectors = SelectorMap::new().expect("selector table");
    let bag = FragmentBag::new(&doc, &selectors);

    c.bench_function("ex_table_parse", |b| {
        b.iter(|| {
            let ability = parse_ability(black_box(&bag.all(Slot::SkillEx)));
            black_box(ability.levels.len())
        })
    });

    c.bench_function("ex_table_parse_and_merge", |b| {
        b.iter(|| {
            let mut ability = parse_ability(&bag.all(Slot::SkillEx));
            let upgrades = parse_upgrades(&bag.all(Slot::SkillExUpgrade));
            black_box(merge_upgrades(&mut ability, upgrades).is_ok())
        })
    });
}

criterion_group!(benches, bench_ability);
criterion_main!(benches);
