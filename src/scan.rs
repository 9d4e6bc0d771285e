//! Integer token scanner and field ordering shared by the temporal decoders

/// Extract a signed integer from the digit run starting at `*pos`
///
/// At most one leading `-` is consumed, followed by the longest run of ASCII digits. On
/// success, `*pos` is advanced past every consumed byte. If no digit follows, `*pos` is left
/// unchanged and `0` is returned: callers compare the cursor before and after the call to
/// detect an empty run.
///
/// No range checking is done. Accumulation wraps on overflow (`i32::wrapping_mul` and
/// `i32::wrapping_add`); fields of valid protocol data have at most six digits.
///
/// ```rust
/// use dbwire_parser::scan::scan_integer;
///
/// let mut pos = 0;
/// assert_eq!(scan_integer(b"-10:20", &mut pos), -10);
/// assert_eq!(pos, 3);
/// ```
pub fn scan_integer(bytes: &[u8], pos: &mut usize) -> i32 {
    let mut i = *pos;
    let negative = bytes.get(i) == Some(&b'-');
    if negative {
        i += 1;
    }
    let digits_start = i;
    let mut value: i32 = 0;
    while let Some(&b) = bytes.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(i32::from(b - b'0'));
        i += 1;
    }
    if i == digits_start {
        return 0;
    }
    *pos = i;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Field of a temporal literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Microseconds,
}

/// Field order of date and date-time literals
pub const DATE_TIME_FIELDS: &[Field] = &[
    Field::Year,
    Field::Month,
    Field::Day,
    Field::Hour,
    Field::Minute,
    Field::Second,
    Field::Microseconds,
];

/// Field order of duration literals
pub const DURATION_FIELDS: &[Field] = &[
    Field::Hour,
    Field::Minute,
    Field::Second,
    Field::Microseconds,
];

/// Position in a field order
///
/// The cursor starts on the first field of `order` and moves one field forward each time a
/// value is stored. Once past the last field, [`current`](#method.current) returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCursor {
    order: &'static [Field],
    consumed: usize,
}

impl FieldCursor {
    pub const fn new(order: &'static [Field]) -> Self {
        FieldCursor { order, consumed: 0 }
    }

    /// Field receiving the next value, or `None` if all fields were filled
    #[inline]
    pub fn current(&self) -> Option<Field> {
        self.order.get(self.consumed).copied()
    }

    /// Move to the next field, returning the new current field
    pub fn advance(&mut self) -> Option<Field> {
        if self.consumed < self.order.len() {
            self.consumed += 1;
        }
        self.current()
    }

    /// Number of fields filled so far
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// True if `field` was filled, i.e. the cursor has moved past it
    pub fn has_passed(&self, field: Field) -> bool {
        self.order[..self.consumed].contains(&field)
    }

    /// Last filled field
    pub fn last_filled(&self) -> Option<Field> {
        self.consumed.checked_sub(1).map(|idx| self.order[idx])
    }
}

/// Scale a fractional-second digit run to microseconds
///
/// `digits` is the length of the run. Runs shorter than six digits are multiplied by ten for
/// each missing digit; runs longer than six digits are refused.
#[inline]
pub fn scale_microseconds(value: i32, digits: usize) -> Option<i32> {
    if digits == 0 || digits > 6 {
        return None;
    }
    let mut value = value;
    for _ in digits..6 {
        value *= 10;
    }
    Some(value)
}
