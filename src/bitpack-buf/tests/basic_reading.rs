use std::io;

use bitpack_buf::BitBuffer;

#[test]
fn read_primitives() -> io::Result<()> {
    let mut buf = BitBuffer::from_bytes(vec![0xDE, 0xC0, 0xAD, 0xDE]);

    assert_eq!(buf.bit_count(), 32);
    assert_eq!(buf.read_u16()?, 0xC0DE);
    assert_eq!(buf.read_u8()?, 0xAD);
    assert_eq!(buf.read_u8()?, 0xDE);

    Ok(())
}

#[test]
fn read_arbitrary_width_int() -> io::Result<()> {
    let mut buf = BitBuffer::new();
    buf.write_bits(500, 10);

    buf.seek_start();
    assert_eq!(buf.read_bits(10)?, 500);

    Ok(())
}

#[test]
fn read_floats() -> io::Result<()> {
    let mut buf = BitBuffer::new();
    buf.write_f32(1.666594);
    buf.write_f32(1e30);
    buf.write_f64(std::f64::consts::PI);

    buf.seek_start();
    assert_eq!(buf.read_f32()?, 1.666594);
    assert_eq!(buf.read_f32()?, 1e30);
    assert_eq!(buf.read_f64()?, std::f64::consts::PI);

    Ok(())
}

#[test]
fn read_chars_and_text() -> io::Result<()> {
    let mut buf = BitBuffer::new();
    buf.write_char('k');
    buf.write_text("Lorem ipsum dolor sit amet");

    buf.seek_start();
    assert_eq!(buf.read_char()?, 'k');
    assert_eq!(buf.read_text(26)?, "Lorem ipsum dolor sit amet");

    Ok(())
}

#[test]
fn skip_and_seek_navigation() -> io::Result<()> {
    let mut buf = BitBuffer::new();
    buf.write_bits(0x155, 10);

    buf.seek_start();
    buf.seek_end();
    buf.write_u32(123_456);

    buf.seek_start();
    buf.skip(10);
    assert_eq!(buf.read_u32()?, 123_456);

    buf.skip(-32);
    assert_eq!(buf.read_u32()?, 123_456);

    Ok(())
}

#[test]
fn read_does_not_raise_high_water() -> io::Result<()> {
    let mut buf = BitBuffer::new();
    buf.write_bit(true);
    assert_eq!(buf.bit_count(), 1);

    // Reading into the zero-padded capacity slack is allowed and
    // leaves the amount of meaningful data untouched.
    buf.seek_start();
    assert_eq!(buf.read_u8()?, 1);
    assert_eq!(buf.bit_count(), 1);
    assert_eq!(buf.position(), 8);

    Ok(())
}

#[test]
fn read_past_capacity_fails() {
    let mut buf = BitBuffer::from_bytes(vec![0xAA]);

    assert_eq!(buf.read_bits(8).unwrap(), 0xAA);

    let err = buf.read_bits(1).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

#[test]
fn from_bytes_equivalence() -> io::Result<()> {
    let mut a = BitBuffer::new();
    for i in 0..1000 {
        a.write_f32(i as f32 * 1e27);
    }
    a.seek_start();

    let mut b = BitBuffer::from_bytes(a.to_vec());
    for _ in 0..1000 {
        assert_eq!(a.read_f32()?, b.read_f32()?);
    }

    Ok(())
}
