//! Byte ring scenarios at an even (500) and an odd (257) capacity
//!
//! Usage:
//!   cargo test --release --test ring_buffer_suite

use simple_ringbuffer::{InlineRingBuffer, RingBuffer, Storage};

const TEST_BUFFER_SIZE: usize = 500;
const TEST_BUFFER_SIZE_ODD: usize = 257;
const STRESS_ITERATIONS: usize = 0x10000;

fn assert_state<S: Storage>(rb: &RingBuffer<S>, capacity: usize, size: usize) {
    assert_eq!(rb.total_size(), capacity);
    assert_eq!(rb.size(), size);
    assert_eq!(rb.reserve_size(), capacity - size);
    assert_eq!(rb.is_empty(), size == 0);
    assert_eq!(rb.is_full(), size == capacity);
}

/// `[0, 1, 2, ...]` truncated to `u8`
fn counting(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

fn half_put_get(capacity: usize) {
    let mut storage = vec![0u8; capacity];
    let mut rb = RingBuffer::init(capacity, &mut storage[..]).unwrap();
    assert_state(&rb, capacity, 0);

    let data = counting(capacity);
    assert!(rb.put(&data[..capacity / 2]) > 0);
    assert_state(&rb, capacity, capacity / 2);

    let mut rdata = vec![0u8; capacity / 2];
    let len = rb.get(&mut rdata);
    for (i, &b) in rdata.iter().enumerate() {
        assert_eq!(b, i as u8);
    }
    assert_eq!(len, rdata.len());
    assert_state(&rb, capacity, 0);
}

fn fill_then_drain(capacity: usize) {
    let mut rb = RingBuffer::with_capacity(capacity).unwrap();

    let data = counting(capacity);
    assert_eq!(rb.put(&data), capacity);
    assert_state(&rb, capacity, capacity);

    let mut rdata = vec![0u8; capacity];
    let len = rb.get(&mut rdata);
    assert_eq!(rdata, data);
    assert_eq!(len, capacity);
    assert_state(&rb, capacity, 0);
}

/// Overfilled put and oversized get. Returns the bytes of the final read.
fn truncated_transfers(capacity: usize) -> Vec<u8> {
    let mut rb = RingBuffer::with_capacity(capacity).unwrap();
    let data = counting(capacity);
    let half = capacity / 2;

    let mut total_size = capacity;
    assert!(rb.put(&data) > 0);
    assert_state(&rb, capacity, total_size);

    let mut rdata = vec![0u8; half];
    assert_eq!(rb.get(&mut rdata), half);
    assert_eq!(rdata, data[..half]);
    total_size -= half;
    assert_state(&rb, capacity, total_size);

    // work in second half: only `reserve_size` bytes fit
    let written = rb.put(&data);
    assert_eq!(written, capacity - total_size);
    assert_eq!(written, half);
    total_size += written;
    assert_state(&rb, capacity, total_size);

    assert_eq!(rb.get(&mut rdata), half);
    for (i, &b) in rdata.iter().enumerate() {
        assert_eq!(b, (i + half) as u8);
    }
    total_size -= half;
    assert_state(&rb, capacity, total_size);

    // Read invalid size: more than queued
    let mut rdata_full = vec![0u8; capacity];
    let len = rb.get(&mut rdata_full);
    assert!(len > 0);
    assert_eq!(len, total_size);
    assert_state(&rb, capacity, 0);

    rdata_full.truncate(len);
    rdata_full
}

fn stress<S: Storage>(rb: &mut RingBuffer<S>, capacity: usize) {
    assert_state(rb, capacity, 0);

    let mut data = vec![0u8; capacity];
    let mut rdata = vec![0u8; capacity];

    for i in 0..STRESS_ITERATIONS {
        let total_size = i % capacity;
        data[..total_size].fill(i as u8);

        assert_eq!(rb.put(&data[..total_size]), total_size);
        assert_state(rb, capacity, total_size);

        let len = rb.get(&mut rdata);
        assert!(rdata[..total_size].iter().all(|&b| b == i as u8));
        assert_eq!(len, total_size);
        assert_state(rb, capacity, 0);
    }
}

#[test]
fn test_work() {
    half_put_get(TEST_BUFFER_SIZE);
}

#[test]
fn test_work_insuff() {
    fill_then_drain(TEST_BUFFER_SIZE);
}

#[test]
fn test_work_invalid() {
    let rdata_full = truncated_transfers(TEST_BUFFER_SIZE);
    for (i, &b) in rdata_full.iter().enumerate() {
        assert_eq!(b, i as u8);
    }
}

#[test]
fn test_work_full() {
    let mut storage = [0u8; TEST_BUFFER_SIZE];
    let mut rb = RingBuffer::init(TEST_BUFFER_SIZE, &mut storage[..]).unwrap();
    stress(&mut rb, TEST_BUFFER_SIZE);
}

#[test]
fn test_work_full_define() {
    let mut rb = InlineRingBuffer::<TEST_BUFFER_SIZE>::new_inline();
    stress(&mut rb, TEST_BUFFER_SIZE);
}

#[test]
fn test_work_read_index_big_to_write_index() {
    let capacity = TEST_BUFFER_SIZE;
    let half = capacity / 2;
    let mut rb = RingBuffer::with_capacity(capacity).unwrap();
    let data = counting(capacity);
    let mut rdata = vec![0u8; half];

    assert!(rb.put(&data) > 0);
    assert_state(&rb, capacity, capacity);

    assert_eq!(rb.get(&mut rdata), half);
    assert_eq!(rdata, data[..half]);
    assert_state(&rb, capacity, half);

    // work in second half
    assert!(rb.put(&data[..half]) > 0);
    assert_state(&rb, capacity, capacity);

    assert_eq!(rb.get(&mut rdata), half);
    assert_eq!(rdata, data[half..]);
    assert_state(&rb, capacity, half);

    // read index now ahead of write index
    assert!(rb.put(&data[..half]) > 0);
    assert_state(&rb, capacity, capacity);

    assert_eq!(rb.get(&mut rdata), half);
    assert_eq!(rdata, data[..half]);
    assert_state(&rb, capacity, half);
}

#[test]
fn test_work_read_index_big_to_write_index_middle() {
    let capacity = TEST_BUFFER_SIZE;
    let quarter = capacity / 4;
    let half = capacity / 2;
    let mut rb = RingBuffer::with_capacity(capacity).unwrap();
    let data = counting(capacity);
    let mut rdata = vec![0u8; quarter];

    assert!(rb.put(&data) > 0);
    assert_state(&rb, capacity, capacity);

    assert_eq!(rb.get(&mut rdata), quarter);
    assert_eq!(rdata, data[..quarter]);
    assert_state(&rb, capacity, capacity * 3 / 4);

    assert_eq!(rb.get(&mut rdata), quarter);
    assert_eq!(rdata, data[quarter..half]);
    assert_state(&rb, capacity, half);

    // work in second half
    assert!(rb.put(&data[..half]) > 0);
    assert_state(&rb, capacity, capacity);

    assert_eq!(rb.get(&mut rdata), quarter);
    assert_eq!(rdata, data[half..half + quarter]);
    assert_state(&rb, capacity, capacity * 3 / 4);

    assert_eq!(rb.get(&mut rdata), quarter);
    assert_eq!(rdata, data[capacity * 3 / 4..]);
    assert_state(&rb, capacity, half);

    // read index now ahead of write index
    assert!(rb.put(&data[..half]) > 0);
    assert_state(&rb, capacity, capacity);

    assert_eq!(rb.get(&mut rdata), quarter);
    assert_eq!(rdata, data[..quarter]);
    assert_state(&rb, capacity, capacity * 3 / 4);

    assert_eq!(rb.get(&mut rdata), quarter);
    assert_eq!(rdata, data[quarter..half]);
    assert_state(&rb, capacity, half);
}

#[test]
fn test_work_odd() {
    half_put_get(TEST_BUFFER_SIZE_ODD);
}

#[test]
fn test_work_insuff_odd() {
    fill_then_drain(TEST_BUFFER_SIZE_ODD);
}

#[test]
fn test_work_invalid_odd() {
    let rdata_full = truncated_transfers(TEST_BUFFER_SIZE_ODD);
    assert_eq!(rdata_full.len(), TEST_BUFFER_SIZE_ODD / 2 + 1);

    // Byte 256 of the first put is `256 as u8 == 0`, and it is still queued
    // ahead of the wrapped second put.
    for (i, &b) in rdata_full.iter().enumerate() {
        if i == 0 {
            assert_eq!(b, 0);
        } else {
            assert_eq!(b, (i - 1) as u8);
        }
    }
}

#[test]
fn test_work_full_odd() {
    let mut rb = RingBuffer::with_capacity(TEST_BUFFER_SIZE_ODD).unwrap();
    stress(&mut rb, TEST_BUFFER_SIZE_ODD);
}

#[test]
fn test_work_read_index_big_to_write_index_odd() {
    let capacity = TEST_BUFFER_SIZE_ODD;
    let half = capacity / 2;
    let mut rb = RingBuffer::with_capacity(capacity).unwrap();
    let data = counting(capacity);
    let mut rdata = vec![0u8; half];

    let mut total_size = capacity;
    assert!(rb.put(&data) > 0);
    assert_state(&rb, capacity, total_size);

    assert_eq!(rb.get(&mut rdata), half);
    assert_eq!(rdata, data[..half]);
    total_size -= half;
    assert_state(&rb, capacity, total_size);

    // work in second half
    total_size += half;
    assert!(rb.put(&data[..half]) > 0);
    assert_state(&rb, capacity, total_size);

    assert_eq!(rb.get(&mut rdata), half);
    for (i, &b) in rdata.iter().enumerate() {
        assert_eq!(b, (i + half) as u8);
    }
    total_size -= half;
    assert_state(&rb, capacity, total_size);

    // read index now ahead of write index
    total_size += half;
    assert!(rb.put(&data[..half]) > 0);
    assert_state(&rb, capacity, total_size);

    assert_eq!(rb.get(&mut rdata), half);
    for (i, &b) in rdata.iter().enumerate() {
        if i == 0 {
            assert_eq!(b, 0);
        } else {
            assert_eq!(b, (i - 1) as u8);
        }
    }
    total_size -= half;
    assert_state(&rb, capacity, total_size);
}

#[test]
fn test_mapped_storage_stress() {
    let region = simple_ringbuffer::MappedRegion::anon(TEST_BUFFER_SIZE_ODD).unwrap();
    let mut rb = RingBuffer::init(TEST_BUFFER_SIZE_ODD, region).unwrap();
    stress(&mut rb, TEST_BUFFER_SIZE_ODD);
}
