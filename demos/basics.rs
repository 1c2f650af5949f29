// Insert, look up and delete entries in a table, printing its shape as it grows.
use linprobe::HashTable;

fn main() -> Result<(), linprobe::AllocError> {
    const NUM_KEYS: usize = 64;

    let keys: Vec<String> = (0..NUM_KEYS).map(|n| format!("key {n}")).collect();

    // No memory is allocated until the first put.
    let mut table = HashTable::new();
    println!("new table: capacity {}, size {}", table.capacity(), table.len());

    for (n, key) in keys.iter().enumerate() {
        let capacity = table.capacity();
        table.put(key.as_bytes(), n * n)?;
        if table.capacity() != capacity {
            println!(
                "grew to capacity {} while inserting {key:?} (size {})",
                table.capacity(),
                table.len()
            );
        }
    }

    // Putting an existing key replaces its value.
    assert!(!table.put(keys[3].as_bytes(), 0)?);
    println!("{:?} -> {:?}", keys[3], table.get(keys[3].as_bytes()));
    println!("{:?} -> {:?}", keys[8], table.get(keys[8].as_bytes()));

    // Delete every 4th entry.
    for key in keys.iter().step_by(4) {
        table.delete(key.as_bytes());
    }
    println!("{:?} -> {:?}", keys[8], table.get(keys[8].as_bytes()));

    println!("final table: capacity {}, size {}", table.capacity(), table.len());
    Ok(())
}
