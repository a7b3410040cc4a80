use criterion::{black_box, criterion_group, criterion_main, Criterion};
use soup_recommender::{
    ContentModel, CountVectorizer, Dataset, DemographicRanker, EnglishTokenizer, Item, SimilarityMatrix,
};

const WORDS: &[&str] = &[
    "action", "adventure", "alien", "bank", "comedy", "crime", "drama", "family", "fantasy", "heist",
    "horror", "jungle", "magic", "monster", "murder", "pirate", "robot", "romance", "space", "spy",
    "superhero", "thriller", "vampire", "war", "western", "zombie", "jamescameron", "nolan",
    "spielberg", "scorsese", "tarantino", "kubrick",
];

/// Deterministic synthetic items, six soup words each
fn synthetic(n: usize) -> Vec<Item> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..n)
        .map(|i| {
            let soup = (0..6)
                .map(|_| WORDS[(next() % WORDS.len() as u64) as usize])
                .collect::<Vec<_>>()
                .join(" ");
            Item {
                title: format!("Movie {i}"),
                soup: Some(soup),
                poster_link: String::new(),
                release_date: String::new(),
                runtime: String::new(),
                vote_average: (next() % 100) as f64 / 10.0,
                vote_count: next() % 20_000,
                overview: String::new(),
            }
        })
        .collect()
}

fn pipeline_benchmark(c: &mut Criterion) {
    let items = synthetic(2_000);
    let dataset = Dataset::from_items(items.clone());
    let vectorizer = CountVectorizer::<EnglishTokenizer>::default();

    c.bench_function("vectorize", |b| {
        b.iter(|| vectorizer.build(black_box(&items)))
    });

    let (_, matrix) = vectorizer.build(&items).expect("vectorize");
    c.bench_function("similarity_matrix", |b| {
        b.iter(|| SimilarityMatrix::compute(black_box(&matrix)))
    });

    let model = ContentModel::build(&dataset).expect("model");
    c.bench_function("recommend", |b| {
        b.iter(|| model.recommend(black_box("Movie 42")))
    });

    let ranker = DemographicRanker::default();
    c.bench_function("popular", |b| {
        b.iter(|| ranker.rank(black_box(dataset.items())))
    });
}

criterion_group!(benches, pipeline_benchmark);
criterion_main!(benches);
