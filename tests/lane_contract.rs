//! Tests for the masked-instruction contract.
//!
//! This suite checks that masked instructions never read or write lanes
//! outside their mask. A store that writes past its mask corrupts memory
//! the caller never handed over.

use lanesim::intrin::*;
use lanesim::{FloatVec, IntVec, Mask};
use proptest::prelude::*;

#[test]
fn store_under_all_false_mask_leaves_buffer_identical() {
    const GUARD: f32 = -123.5;
    let mut buffer = [GUARD; 8];
    let before = buffer.map(f32::to_bits);

    store_float(&mut buffer, splat_float::<8>(1.0), mask_all_zeros());

    assert_eq!(buffer.map(f32::to_bits), before);
}

#[test]
fn partial_store_stops_at_mask_boundary() {
    const GUARD: i32 = 0x5A5A;
    let mut buffer = [GUARD; 8];

    store_int(&mut buffer, splat_int::<8>(7), mask_first(3));

    assert_eq!(&buffer[..3], &[7, 7, 7]);
    for (i, &cell) in buffer.iter().enumerate().skip(3) {
        assert_eq!(cell, GUARD, "Guard cell {} was overwritten", i);
    }
}

#[test]
fn tail_load_never_reads_past_short_buffer() {
    // Only two elements exist; lanes 2 and 3 are masked off and must keep
    // their prior contents instead of reading out of bounds.
    let mut v = FloatVec::<4>::splat(-1.0);
    load_float(&mut v, &[10.0, 20.0], mask_first(2));
    assert_eq!(v.to_array(), [10.0, 20.0, -1.0, -1.0]);
}

#[test]
#[should_panic(expected = "outside a buffer")]
fn active_lane_past_buffer_end_is_a_contract_failure() {
    let mut out = [0.0f32; 3];
    store_float(&mut out, splat_float::<4>(1.0), mask_all_ones());
}

#[test]
fn mask_population_identities() {
    assert_eq!(count_active(mask_all_ones::<16>()), 16);
    assert_eq!(count_active(mask_not(mask_all_ones::<16>())), 0);
    for k in 0..=16 {
        assert_eq!(count_active(mask_first::<16>(k)), k);
    }
}

proptest! {
    #[test]
    fn masked_add_touches_only_active_lanes(
        a in prop::array::uniform8(-1.0e3f32..1.0e3),
        b in prop::array::uniform8(-1.0e3f32..1.0e3),
        prior in prop::array::uniform8(-1.0e3f32..1.0e3),
        bits in prop::array::uniform8(any::<bool>()),
    ) {
        let mask = Mask::<8>::from_array(bits);
        let mut dst = FloatVec::from_array(prior);
        add_float(&mut dst, FloatVec::from_array(a), FloatVec::from_array(b), mask);
        for i in 0..8 {
            let expected = if bits[i] { a[i] + b[i] } else { prior[i] };
            prop_assert_eq!(dst[i].to_bits(), expected.to_bits());
        }
    }

    #[test]
    fn comparison_is_subset_of_active(
        a in prop::array::uniform8(-50i32..50),
        bits in prop::array::uniform8(any::<bool>()),
    ) {
        let active = Mask::<8>::from_array(bits);
        let gt = compare_gt_int(IntVec::from_array(a), splat_int(0), active);
        prop_assert_eq!(gt & !active, Mask::all_false());
        for i in 0..8 {
            prop_assert_eq!(gt[i], bits[i] && a[i] > 0);
        }
    }

    #[test]
    fn mask_composition_laws(
        x in prop::array::uniform4(any::<bool>()),
        y in prop::array::uniform4(any::<bool>()),
    ) {
        let (a, b) = (Mask::<4>::from_array(x), Mask::<4>::from_array(y));
        prop_assert_eq!(mask_not(mask_and(a, b)), mask_or(mask_not(a), mask_not(b)));
        prop_assert_eq!(count_active(a) + count_active(mask_not(a)), 4);
        prop_assert!(count_active(mask_and(a, b)) <= count_active(a).min(count_active(b)));
    }
}
