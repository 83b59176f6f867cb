//! End-to-end checks through the `dbytes` facade

use dbytes::codec::raw;
use dbytes::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_literal_byte_layouts() {
    assert_eq!(BigEndian::pack(0x1234u16), [0x12, 0x34]);
    assert_eq!(LittleEndian::pack(0x1234u16), [0x34, 0x12]);
    assert_eq!(pack(-1i32, Endian::Big), [0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(
        pack(0x0102_0304_0506_0708u64, Endian::Big),
        [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
    );
    assert_eq!(unpack::<i32>(&[0x00, 0x00, 0x00, 0x01], Endian::Big, 0), Ok(1));
}

#[test]
fn test_mixed_order_record() {
    // A header in network order followed by a little-endian payload
    let mut record = [0u8; 2 + 4 + 8];
    NetworkEndian::pack_into(0x0102u16, &mut record, 0).unwrap();
    LittleEndian::pack_array(&[-1i32], 0, &mut record, 2, 1).unwrap();
    LittleEndian::pack_into(u64::MAX - 1, &mut record, 6).unwrap();

    assert_eq!(&record[..2], &[0x01, 0x02]);
    assert_eq!(LittleEndian::unpack::<i32>(&record, 2), Ok(-1));
    assert_eq!(record[6], 0xFE);
    assert_eq!(BigEndian::unpack::<u16>(&record, 0), Ok(0x0102));
}

#[test]
fn test_error_taxonomy_through_facade() {
    init_logging();

    let mut buf = [0u8; 8];
    let err = pack_into(1u64, Endian::Big, &mut buf, 1).unwrap_err();
    assert!(matches!(err, Error::InvalidRange { name: "offset", value: 1, limit: 0 }));

    let err = pack_array(&[1u16, 2, 3], 2, &mut buf, 0, 2, Endian::Big).unwrap_err();
    assert!(matches!(err, Error::InvalidArgumentCombination { name: "src_offset", .. }));

    let err = unsafe { raw::unpack::<u16>(core::ptr::null(), 0, Endian::Little, 0) }.unwrap_err();
    assert!(matches!(err, Error::NullArgument { name: "buffer" }));

    let err = rotate_right(1u8, 9).unwrap_err();
    assert_eq!(err.to_string(), "distance out of range: 9 (limit 8)");
}

#[test]
fn test_result_ext_in_caller_code() {
    // Callers wrapping the codec can report their own parameter names
    fn write_length(frame: &mut [u8], at: usize, len: u32) -> Result<()> {
        pack_into(len, Endian::Big, frame, at).with_name("length_field")
    }

    let mut frame = [0u8; 6];
    write_length(&mut frame, 2, 9).unwrap();
    assert_eq!(frame, [0, 0, 0, 0, 0, 9]);
    assert_eq!(write_length(&mut frame, 3, 9).unwrap_err().name(), "length_field");
}

#[test]
fn test_pack_helpers_allocate_exact_sizes() {
    assert_eq!(dbytes::codec::pack_to_vec(7i16, Endian::Big), vec![0, 7]);
    assert_eq!(BigEndian::pack_slice(&[1u32, 2]), vec![0, 0, 0, 1, 0, 0, 0, 2]);
}

#[test]
fn test_threads_share_nothing() {
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            std::thread::spawn(move || {
                let values: Vec<u64> = (0..1000).map(|i| i * 31 + t).collect();
                let packed = BigEndian::pack_slice(&values);
                let mut back = vec![0u64; values.len()];
                BigEndian::unpack_array(&packed, 0, &mut back, 0, values.len()).unwrap();
                back == values
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
