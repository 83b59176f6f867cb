//! Property-based tests for the endianness codec

use dbytes::codec::{self, Word};
use dbytes::Endian;
use dbytes_tests::reference::{pack_each, reversed};
use dbytes_tests::strategies::{array_window, endian};
use proptest::prelude::*;

fn round_trips<T: Word>(value: T, order: Endian) -> bool {
    let bytes = codec::pack(value, order);
    codec::unpack::<T>(bytes.as_ref(), order, 0) == Ok(value)
}

fn orders_mirror<T: Word>(value: T) -> bool {
    let big = codec::pack(value, Endian::Big);
    let little = codec::pack(value, Endian::Little);
    big.as_ref() == reversed(little.as_ref()).as_slice()
}

proptest! {
    #[test]
    fn scalar_round_trip(
        a in any::<u16>(),
        b in any::<i16>(),
        c in any::<u32>(),
        d in any::<i32>(),
        e in any::<u64>(),
        f in any::<i64>(),
        order in endian(),
    ) {
        prop_assert!(round_trips(a, order));
        prop_assert!(round_trips(b, order));
        prop_assert!(round_trips(c, order));
        prop_assert!(round_trips(d, order));
        prop_assert!(round_trips(e, order));
        prop_assert!(round_trips(f, order));
    }

    #[test]
    fn big_is_reverse_of_little(a in any::<i16>(), b in any::<u32>(), c in any::<i64>()) {
        prop_assert!(orders_mirror(a));
        prop_assert!(orders_mirror(b));
        prop_assert!(orders_mirror(c));
    }

    #[test]
    fn matches_core_layout(v in any::<u64>()) {
        prop_assert_eq!(codec::pack(v, Endian::Big), v.to_be_bytes());
        prop_assert_eq!(codec::pack(v as i32, Endian::Little), (v as i32).to_le_bytes());
    }

    #[test]
    fn round_trip_at_any_valid_offset(
        v in any::<i64>(),
        pad in 0usize..32,
        order in endian(),
    ) {
        let mut buf = vec![0u8; pad + 8];
        codec::pack_into(v, order, &mut buf, pad).unwrap();
        prop_assert_eq!(codec::unpack::<i64>(&buf, order, pad).unwrap(), v);
    }

    #[test]
    fn pack_into_rejects_bad_offsets_without_writing(
        v in any::<u32>(),
        len in 0usize..16,
        extra in 1usize..64,
        order in endian(),
    ) {
        let offset = len.saturating_sub(4) + extra;
        let mut buf = vec![0xA5u8; len];
        let err = codec::pack_into(v, order, &mut buf, offset).unwrap_err();
        prop_assert!(err.is_range());
        prop_assert_eq!(err.name(), "offset");
        prop_assert!(buf.iter().all(|&b| b == 0xA5));
        prop_assert!(codec::unpack::<u32>(&buf, order, offset).is_err());
    }

    #[test]
    fn bulk_pack_matches_scalar_loop(
        (values, src, dst, count, buffer_len) in array_window::<i32>(4),
        order in endian(),
    ) {
        let mut bulk = vec![0u8; buffer_len];
        codec::pack_array(&values, src, &mut bulk, dst, count, order).unwrap();

        let mut expected = vec![0u8; buffer_len];
        expected[dst..dst + count * 4].copy_from_slice(&pack_each(&values[src..src + count], order));
        prop_assert_eq!(&bulk, &expected);

        let mut back = vec![0i32; values.len()];
        codec::unpack_array(&bulk, dst, &mut back, src, count, order).unwrap();
        prop_assert_eq!(&back[src..src + count], &values[src..src + count]);
    }

    #[test]
    fn bulk_u64_matches_scalar_loop(
        (values, src, dst, count, buffer_len) in array_window::<u64>(8),
        order in endian(),
    ) {
        let mut bulk = vec![0u8; buffer_len];
        codec::pack_array(&values, src, &mut bulk, dst, count, order).unwrap();
        let expected = pack_each(&values[src..src + count], order);
        prop_assert_eq!(&bulk[dst..dst + count * 8], expected.as_slice());
    }

    #[test]
    fn rejected_array_calls_write_nothing(
        values in prop::collection::vec(any::<u16>(), 1..16),
        buffer_len in 1usize..40,
        src in 0usize..20,
        dst in 0usize..40,
        count in 0usize..20,
        order in endian(),
    ) {
        let mut buf = vec![0x3Cu8; buffer_len];
        if codec::pack_array(&values, src, &mut buf, dst, count, order).is_err() {
            prop_assert!(buf.iter().all(|&b| b == 0x3C));
        }
    }
}
