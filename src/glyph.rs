//! glyph.rs
//! Copyright © 2026 Sean Springer
//! [This program is licensed under the "MIT License"]
//! Please see the file LICENSE in the source distribution of this software for license terms.
//!
//! 5x5 LED frames for the countdown. Numerals are 3 columns wide and centred, leaving
//! the outer columns free for the corner markers.

use crate::countdown::CountdownState;

/// MB2 LED grid is 5x5
pub const LED_SIZE: usize = 5;
/// conveience type def
pub type Frame = [[u8; LED_SIZE]; LED_SIZE];

/// 3x5 numerals, one row per entry, bit 2 is the left column.
const DIGITS: [[u8; LED_SIZE]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b011, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

/// Frame showing the single digit `n`. Values above 9 show their last digit.
pub fn digit(n: u8) -> Frame {
    let mut frame = [[0u8; LED_SIZE]; LED_SIZE];
    let rows = DIGITS[(n % 10) as usize];
    for (row, bits) in frame.iter_mut().zip(rows) {
        for col in 0..3 {
            if bits & (0b100u8 >> col) != 0 {
                row[col + 1] = 1;
            }
        }
    }
    frame
}

/// Frame for a countdown snapshot: the remaining count, plus the four corners once
/// the run has expired.
pub fn frame_for(snapshot: &CountdownState) -> Frame {
    let mut frame = digit(snapshot.remaining);
    if snapshot.is_expired() {
        let last = LED_SIZE - 1;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            frame[row][col] = 1;
        }
    }
    frame
}
