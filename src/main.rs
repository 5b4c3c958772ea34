use std::thread;
use std::time::Duration;

use scq::{CartCapacity, CartCount, QueueConfig, SlotCount, SlotId, SlottedCartQueue};

fn main() {
    println!("Slotted Cart Queue Demo");
    println!("=======================");

    let queue = SlottedCartQueue::<String>::new(QueueConfig::new(
        SlotCount(2),
        CartCount(4),
        CartCapacity(3),
    ))
    .expect("valid configuration");

    println!("slots: {}, carts: {}, capacity: {}", queue.slots(), queue.carts(), queue.capacity());

    let producer1 = queue.clone();
    let producer1_handle = thread::spawn(move || {
        for i in 0..10 {
            match producer1.enqueue(SlotId(0), format!("producer1:{i}")) {
                Ok(()) => println!("producer1 sent {i}"),
                Err(_) => {
                    println!("producer1 found the queue closed");
                    break;
                }
            }
            thread::sleep(Duration::from_millis(5));
        }
    });

    let producer2 = queue.clone();
    let producer2_handle = thread::spawn(move || {
        for i in 0..10 {
            match producer2.enqueue(SlotId(1), format!("producer2:{i}")) {
                Ok(()) => println!("producer2 sent {i}"),
                Err(_) => {
                    println!("producer2 found the queue closed");
                    break;
                }
            }
            thread::sleep(Duration::from_millis(7));
        }
    });

    let consumer = queue.clone();
    let consumer_handle = thread::spawn(move || loop {
        let cart = consumer.dequeue();
        match cart.get() {
            Ok((slot, values)) => println!("delivered slot {}: {:?}", slot.0, values),
            Err(_) => {
                println!("consumer observed queue closed and drained");
                break;
            }
        }
    });

    producer1_handle.join().expect("producer1 panicked");
    producer2_handle.join().expect("producer2 panicked");

    queue.close();

    consumer_handle.join().expect("consumer panicked");

    println!("\nDemo complete.");
}
