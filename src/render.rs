//! Frame computation for the 8x8 countdown matrix
//!
//! Every function here is pure: the frame for a counter value depends on
//! nothing but that value, so the main loop can recompute it on every pass.

use crate::config::{FRAME_LEN, MATRIX_ROWS, MIRROR_STATE};

/// Lit red LEDs of the active row while filling from the left
pub const RED_LEFT: [u8; 8] = [0x1, 0x3, 0x7, 0xf, 0x8, 0xc, 0xe, 0xf];

/// Lit red LEDs of the active row while filling from the right
pub const RED_RIGHT: [u8; 8] = [0x8, 0xc, 0xe, 0xf, 0x1, 0x3, 0x7, 0xf];

/// One row layer of the matrix, a set bit means "lit".
///
/// Bit order on the wire: row select first, then red, green, blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub row: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Every row blue
pub const IDLE_FRAME: Frame = Frame {
    row: 0xff,
    red: 0x00,
    green: 0x00,
    blue: 0xff,
};

/// Every row red
pub const OVERTIME_ON: Frame = Frame {
    row: 0xff,
    red: 0xff,
    green: 0x00,
    blue: 0x00,
};

/// Everything dark
pub const OVERTIME_OFF: Frame = Frame {
    row: 0x00,
    red: 0x00,
    green: 0x00,
    blue: 0x00,
};

impl Frame {
    #[inline]
    pub fn to_bytes(self) -> [u8; FRAME_LEN] {
        [self.row, self.red, self.green, self.blue]
    }
}

/// Row currently being filled, `state / 4` folded into 0..8.
#[inline]
pub fn active_row(state: u8) -> u8 {
    let row = state / 4;
    if row >= MATRIX_ROWS {
        row - MATRIX_ROWS
    } else {
        row
    }
}

/// Layer `row` (0..8) of a running countdown at counter `state` (0..=63).
///
/// Only the low three bits of `row` are used, row 8 is row 0 again.
///
/// The first half fills the top half of each row from the left going down,
/// the second half fills the rest from the right going back up. Green marks
/// whatever is not red.
pub fn running_layer(state: u8, row: u8) -> Frame {
    let row = row % MATRIX_ROWS;
    let current = active_row(state);
    let lit = usize::from(state % 8);
    let mirrored = state >= MIRROR_STATE;

    let select = if mirrored { 1 << row } else { 1 << (7 - row) };

    let red = match (mirrored, row.cmp(&current)) {
        (false, core::cmp::Ordering::Equal) => RED_LEFT[lit] << 4,
        (false, core::cmp::Ordering::Less) => RED_LEFT[3] << 4,
        (false, core::cmp::Ordering::Greater) => 0x00,
        (true, core::cmp::Ordering::Equal) => RED_RIGHT[lit] | 0xf0,
        (true, core::cmp::Ordering::Less) => RED_RIGHT[3] | 0xf0,
        (true, core::cmp::Ordering::Greater) => 0xf0,
    };

    Frame {
        row: select,
        red,
        green: !red,
        blue: 0x00,
    }
}

/// All layers of one running frame, in scan order.
pub fn running_layers(state: u8) -> impl Iterator<Item = Frame> {
    (0..MATRIX_ROWS).map(move |row| running_layer(state, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_wire_order() {
        let frame = Frame {
            row: 1,
            red: 2,
            green: 3,
            blue: 4,
        };
        assert_eq!(frame.to_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn active_row_wraps_into_matrix() {
        assert_eq!(active_row(0), 0);
        assert_eq!(active_row(31), 7);
        assert_eq!(active_row(32), 0);
        assert_eq!(active_row(63), 7);
    }

    #[test]
    fn layer_is_pure() {
        for state in 0..=63 {
            for row in 0..8 {
                let first = running_layer(state, row);
                // interleave other work to make sure nothing is remembered
                let _ = running_layer(63 - state, 7 - row);
                assert_eq!(running_layer(state, row), first);
            }
        }
    }

    #[test]
    fn start_of_countdown() {
        let layers: [Frame; 8] = core::array::from_fn(|row| running_layer(0, row as u8));
        assert_eq!(layers[0].row, 0x80);
        assert_eq!(layers[0].red, 0x10);
        assert_eq!(layers[0].green, 0xef);
        for layer in &layers[1..] {
            assert_eq!(layer.red, 0x00);
            assert_eq!(layer.green, 0xff);
        }
        assert!(layers.iter().all(|l| l.blue == 0));
        assert_eq!(layers[7].row, 0x01);
    }

    #[test]
    fn left_half_grows_left_to_right() {
        // state 10: row 2 active with RED_LEFT[2]
        let rows: [u8; 8] = core::array::from_fn(|row| running_layer(10, row as u8).red);
        assert_eq!(rows, [0xf0, 0xf0, 0x70, 0, 0, 0, 0, 0]);
        assert_eq!(running_layer(10, 2).row, 1 << 5);
    }

    #[test]
    fn right_half_is_mirrored() {
        // state 42 is the same active row and lit index as 10, on the right side
        let rows: [u8; 8] = core::array::from_fn(|row| running_layer(42, row as u8).red);
        assert_eq!(rows, [0xff, 0xff, 0xfe, 0xf0, 0xf0, 0xf0, 0xf0, 0xf0]);
        assert_eq!(running_layer(42, 2).row, 1 << 2);

        // state 40 selects RED_RIGHT[0] on the active row
        assert_eq!(running_layer(40, 2).red, 0xf8);
        assert_eq!(running_layer(8, 2).red, 0x10);
    }

    #[test]
    fn row_index_wraps_around_the_matrix() {
        for state in [0, 10, 40, 63] {
            assert_eq!(running_layer(state, 8), running_layer(state, 0));
            assert_eq!(running_layer(state, 15), running_layer(state, 7));
            assert_eq!(running_layer(state, 255), running_layer(state, 7));
        }
    }

    #[test]
    fn end_of_countdown_is_all_red() {
        for frame in running_layers(63) {
            assert_eq!(frame.red, 0xff);
            assert_eq!(frame.green, 0x00);
        }
    }

    #[test]
    fn every_layer_selects_one_row() {
        for state in 0..=63 {
            let mut seen = 0u8;
            for frame in running_layers(state) {
                assert_eq!(frame.row.count_ones(), 1);
                seen |= frame.row;
            }
            assert_eq!(seen, 0xff);
        }
    }
}
