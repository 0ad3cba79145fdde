use book_engine::{quote, sweep, BookManager, Event, Order, OrderBook, QuoteSide, Side};
use rust_decimal::Decimal;

fn main() -> Result<(), book_engine::BookError> {
    let mut asks = OrderBook::new(Side::Ask);

    asks.insert(Order::new("1", Side::Ask, Decimal::from(10), 5, 0))?;
    asks.insert(Order::new("2", Side::Ask, Decimal::from(11), 10, 0))?;

    let fill = sweep(&asks, 8)?;
    println!("Buying 8 units:");
    for order in asks.best_first() {
        println!("  {} units @ {}", order.size, order.price);
    }
    println!("Cost: {}", fill.notional);

    assert_eq!(quote(&asks, 8)?, Some(Decimal::from(83)));
    assert_eq!(quote(&asks, 20)?, None);

    let mut manager = BookManager::new(50);
    let events = [
        Event::Add {
            timestamp: 1,
            id: "A".into(),
            side: Side::Bid,
            price: Decimal::from(9),
            size: 100,
        },
        Event::Reduce {
            timestamp: 2,
            id: "A".into(),
            size: 60,
        },
    ];

    println!("Selling 50 units:");
    for event in &events {
        for update in manager.handle(event).updates {
            match update.quote {
                Some(value) => println!("  {} {} {:.2}", update.timestamp, update.side.label(), value),
                None => println!("  {} {} NA", update.timestamp, update.side.label()),
            }
        }
    }

    assert_eq!(manager.state(QuoteSide::Sell), book_engine::QuoteState::Unavailable);
    Ok(())
}
