use skydial::{ClockBoard, SystemClock};
use std::thread;
use std::time::Duration;

const TICKS: usize = 3;

fn main() {
    let mut board = ClockBoard::with_defaults();
    if let Err(err) = board.add_city("Mumbai") {
        eprintln!("{err}");
    }
    let interval = Duration::from_millis(board.config().tick_interval_ms);

    for tick in 0..TICKS {
        if tick > 0 {
            thread::sleep(interval);
            println!();
        }
        for card in board.tick_from(&SystemClock) {
            match card.visual() {
                Some(sky) => println!(
                    "{:<10} {:>11}  {:<22} {}",
                    card.name, card.time_text, card.date_text, sky
                ),
                None => println!("{:<10} {:>11}", card.name, card.time_text),
            }
        }
    }
}
