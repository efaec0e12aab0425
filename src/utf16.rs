// utf16.rs

/// First scalar value that needs a surrogate pair.
const SUPPLEMENTARY_BASE: u32 = 0x10000;
const HIGH_SURROGATE_BASE: u32 = 0xD800;
const LOW_SURROGATE_BASE: u32 = 0xDC00;
const TEN_BIT_SPAN: u32 = 0x400;
const TEN_BIT_MASK: u32 = 0x3FF;

/// One Unicode scalar value encoded as UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Units {
    Single(u16),
    Pair(u16, u16),
}

/// Encodes `scalar` into one code unit or a surrogate pair.
///
/// Valid input is `0..=0xD7FF` or `0xE000..=0x10FFFF`. Anything else is out of
/// contract: surrogate code points come back as a single unit and values above
/// 0x10FFFF produce unspecified units, but neither panics.
pub fn encode_scalar(scalar: u32) -> Utf16Units {
    if scalar <= 0xFFFF {
        return Utf16Units::Single(scalar as u16);
    }

    let v = scalar.wrapping_sub(SUPPLEMENTARY_BASE);
    let high = HIGH_SURROGATE_BASE.wrapping_add(v / TEN_BIT_SPAN);
    let low = LOW_SURROGATE_BASE + (v & TEN_BIT_MASK);
    Utf16Units::Pair(high as u16, low as u16)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn decode_pair(high: u16, low: u16) -> u32 {
        let high = u32::from(high) - HIGH_SURROGATE_BASE;
        let low = u32::from(low) - LOW_SURROGATE_BASE;
        SUPPLEMENTARY_BASE + high * TEN_BIT_SPAN + low
    }

    fn units(encoded: Utf16Units) -> Vec<u16> {
        match encoded {
            Utf16Units::Single(unit) => vec![unit],
            Utf16Units::Pair(high, low) => vec![high, low],
        }
    }

    #[test]
    fn test_bmp_values_encode_to_themselves() {
        for fixture in 0..=0xFFFFu32 {
            let actual = encode_scalar(fixture);
            let expected = Utf16Units::Single(fixture as u16);
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_supplementary_values_follow_surrogate_formula() {
        for fixture in 0x10000..=0x10FFFFu32 {
            let v = fixture - 0x10000;
            let high = (0xD800 + v / 0x400) as u16;
            let low = (0xDC00 + v % 0x400) as u16;
            let actual = encode_scalar(fixture);
            let expected = Utf16Units::Pair(high, low);
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_pairs_decode_back_to_the_scalar() {
        for fixture in (0x10000..=0x10FFFFu32).step_by(7) {
            let Utf16Units::Pair(high, low) = encode_scalar(fixture) else {
                panic!("expected a surrogate pair for {fixture:#X}");
            };
            assert_eq!(decode_pair(high, low), fixture);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(encode_scalar(0xFFFF), Utf16Units::Single(0xFFFF));
        assert_eq!(encode_scalar(0x10000), Utf16Units::Pair(0xD800, 0xDC00));
        assert_eq!(encode_scalar(0x10FFFF), Utf16Units::Pair(0xDBFF, 0xDFFF));
    }

    #[test]
    fn test_agrees_with_char_encode_utf16() {
        for fixture in ['A', 'é', '€', '\u{FFFD}', '😀', '\u{1D11E}'] {
            let mut buf = [0u16; 2];
            let expected = fixture.encode_utf16(&mut buf).to_vec();
            let actual = units(encode_scalar(fixture as u32));
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_out_of_contract_input_does_not_panic() {
        assert_eq!(encode_scalar(0xD800), Utf16Units::Single(0xD800));
        assert_eq!(units(encode_scalar(0x110000)).len(), 2);
        assert_eq!(units(encode_scalar(u32::MAX)).len(), 2);
    }
}
