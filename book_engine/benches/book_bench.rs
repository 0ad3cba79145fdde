use book_engine::{quote, BookManager, Event, Order, OrderBook, Side};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;
use std::time::Duration;

// Market data log with a mix of adds and reductions on both sides
fn synthetic_log(event_count: usize) -> Vec<Event> {
    let mut events = Vec::with_capacity(event_count);
    let mut live = Vec::new();

    for i in 0..event_count {
        let timestamp = i as u64;
        // 60% adds, 40% reductions
        if i % 10 < 6 || live.is_empty() {
            let side = if i % 2 == 0 { Side::Bid } else { Side::Ask };
            let offset = (i % 20) as i64;
            let price = match side {
                Side::Bid => Decimal::new(4400 - offset, 2),
                Side::Ask => Decimal::new(4420 + offset, 2),
            };
            let id = format!("o{i}");
            live.push(id.clone());
            events.push(Event::Add {
                timestamp,
                id,
                side,
                price,
                size: ((i % 5) as u64 + 1) * 50,
            });
        } else {
            let id = live.swap_remove(i % live.len());
            // Oversized reductions close the order
            events.push(Event::Reduce {
                timestamp,
                id,
                size: 1000,
            });
        }
    }

    events
}

fn bench_replay_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    for event_count in [100, 1000, 10000].iter() {
        let events = synthetic_log(*event_count);
        group.throughput(Throughput::Elements(*event_count as u64));

        group.bench_with_input(
            format!("{}_events", event_count),
            &events,
            |b, events| {
                b.iter(|| {
                    let mut manager = BookManager::new(200);
                    for event in events {
                        black_box(manager.handle(event));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    group.bench_function("insert_order", |b| {
        let mut book = OrderBook::new(Side::Bid);
        let price = Decimal::new(4410, 2);
        let mut next_id = 0u64;

        b.iter(|| {
            next_id += 1;
            book.insert(black_box(Order::new(
                format!("o{next_id}"),
                Side::Bid,
                price,
                100,
                next_id,
            )))
        });
    });

    group.finish();
}

fn bench_deep_book_quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_book");

    let mut book = OrderBook::new(Side::Ask);
    for i in 0..1000 {
        book.insert(Order::new(
            format!("o{i}"),
            Side::Ask,
            Decimal::new(50000 + i, 2),
            100,
            i as u64,
        ))
        .ok();
    }

    group.bench_function("quote_across_levels", |b| {
        // Target consumes half of the book
        b.iter(|| quote(black_box(&book), black_box(50_000)));
    });

    group.finish();
}

fn bench_reduce_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("insert_reduce", |b| {
        b.iter(|| {
            let mut book = OrderBook::new(Side::Bid);
            let base_price = Decimal::from(50000);

            for i in 0..1000u64 {
                let price = base_price + Decimal::from((i % 10) as i64 - 5);
                let id = format!("o{i}");
                book.insert(Order::new(id.clone(), Side::Bid, price, 10, i)).ok();

                if i % 3 == 0 {
                    book.reduce(&id, 10).ok();
                }
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_replay_throughput,
    bench_insert,
    bench_deep_book_quote,
    bench_reduce_churn
);

criterion_main!(benches);
