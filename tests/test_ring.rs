use bytecast::buffer::{RingBuffer, RingError};

#[test]
fn test_read_back_in_write_order_across_wraparound() {
    // Capacity small enough that writes straddle the physical boundary
    // many times over.
    let mut ring = RingBuffer::new(16);
    let reader = ring.open().unwrap();

    let source: Vec<u8> = (0..200u16).map(|i| (i % 251) as u8).collect();
    let mut replayed = Vec::new();

    let mut offset = 0;
    while offset < source.len() {
        let end = (offset + 7).min(source.len());
        let written = ring.write(&source[offset..end]);
        assert_eq!(written, end - offset, "write fits within free space");
        offset = end;

        let mut out = [0u8; 16];
        let n = ring.read(reader, &mut out);
        replayed.extend_from_slice(&out[..n]);
    }

    assert_eq!(replayed, source);
}

#[test]
fn test_readers_attached_at_different_times_see_different_suffixes() {
    let mut ring = RingBuffer::new(64);

    let early = ring.open().unwrap();
    ring.write(b"aaaa");

    let late = ring.open().unwrap();
    assert_eq!(ring.available(late), 0, "new reader starts at live point");

    ring.write(b"bbbb");

    let mut out = [0u8; 64];
    let n = ring.read(early, &mut out);
    assert_eq!(&out[..n], b"aaaabbbb");

    let n = ring.read(late, &mut out);
    assert_eq!(&out[..n], b"bbbb");
}

#[test]
fn test_flush_discards_backlog() {
    let mut ring = RingBuffer::new(32);
    let reader = ring.open().unwrap();

    ring.write(b"stale data");
    ring.flush(reader);
    assert_eq!(ring.available(reader), 0);

    ring.write(b"live");
    let mut out = [0u8; 32];
    let n = ring.read(reader, &mut out);
    assert_eq!(&out[..n], b"live");
}

#[test]
fn test_writer_never_overruns_slowest_reader() {
    let mut ring = RingBuffer::new(16);
    let reader = ring.open().unwrap();

    // Only capacity - 1 bytes fit while a reader holds the tail.
    let written = ring.write(&[0x42; 20]);
    assert_eq!(written, 15);
    assert_eq!(ring.available(reader), 15);
    assert_eq!(ring.free_space(), 0);

    // Excess is dropped, not queued.
    assert_eq!(ring.write(b"x"), 0);

    ring.consume(reader, 5);
    assert_eq!(ring.free_space(), 5);
    assert_eq!(ring.write(&[0x43; 10]), 5);
}

#[test]
fn test_free_space_tracks_slowest_reader() {
    let mut ring = RingBuffer::new(64);
    let slow = ring.open().unwrap();
    let fast = ring.open().unwrap();

    ring.write(&[1u8; 40]);

    let mut out = [0u8; 64];
    let n = ring.read(fast, &mut out);
    assert_eq!(n, 40);

    // The fast reader is drained but the slow one still pins the tail.
    assert_eq!(ring.available(slow), 40);
    assert_eq!(ring.free_space(), 64 - 1 - 40);

    ring.close(slow);
    assert_eq!(ring.free_space(), 64 - 1);
}

#[test]
fn test_full_capacity_available_with_no_readers() {
    let mut ring = RingBuffer::new(32);
    assert_eq!(ring.free_space(), 32);

    // Bytes written before any reader attaches are not preserved.
    assert_eq!(ring.write(&[7u8; 32]), 32);
    let reader = ring.open().unwrap();
    assert_eq!(ring.available(reader), 0);
}

#[test]
fn test_reader_limit_and_slot_reuse() {
    let mut ring = RingBuffer::with_max_readers(64, 2);

    let a = ring.open().unwrap();
    let _b = ring.open().unwrap();
    assert_eq!(ring.open(), Err(RingError::ReadersExhausted));

    ring.close(a);
    assert!(ring.open().is_ok());
}

#[test]
fn test_peek_does_not_advance() {
    let mut ring = RingBuffer::new(32);
    let reader = ring.open().unwrap();
    ring.write(b"hello");

    let mut out = [0u8; 3];
    assert_eq!(ring.peek(reader, &mut out), 3);
    assert_eq!(&out, b"hel");
    assert_eq!(ring.peek(reader, &mut out), 3);
    assert_eq!(&out, b"hel");
    assert_eq!(ring.available(reader), 5);

    // Consuming what was actually delivered advances past it.
    ring.consume(reader, 3);
    let mut rest = [0u8; 8];
    let n = ring.peek(reader, &mut rest);
    assert_eq!(&rest[..n], b"lo");
}

#[test]
fn test_operations_on_closed_reader_are_inert() {
    let mut ring = RingBuffer::new(32);
    let reader = ring.open().unwrap();
    ring.write(b"data");
    ring.close(reader);

    let mut out = [0u8; 8];
    assert_eq!(ring.available(reader), 0);
    assert_eq!(ring.peek(reader, &mut out), 0);
    assert_eq!(ring.read(reader, &mut out), 0);
}
