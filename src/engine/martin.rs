//! Martin/Hopkins divisor table and bracket selection
//!
//! The Extended Martin formula estimates VLDL cholesterol as triglycerides
//! divided by a variable divisor, looked up from a two-dimensional table
//! indexed by (triglyceride bracket, non-HDL cholesterol bracket). The table
//! is compiled-in, read-only reference data.
//!
//! Bracket rows are non-uniform in width: dense increments from 7 through
//! 799, coarse 10-wide rows from 400 through 790 overlapping the dense
//! range, and a final catch-all row keyed 13975. The overlap is inherited
//! data; range matching is strictly first-match-wins and the enumeration
//! order must not be changed.

/// Non-HDL column keys, in column order. These are the inherited column
/// labels; selection uses the thresholds 100, 130, 160, 190 and 220, with
/// the 220 column open-ended.
pub const NON_HDL_KEYS: [i64; 6] = [100, 129, 159, 189, 219, 220];

/// Divisor rows keyed by triglyceride bracket, ascending.
/// Columns follow `NON_HDL_KEYS`.
const MARTIN_TABLE: [(i64, [f64; 6]); 70] = [
    (7, [3.5, 3.4, 3.3, 3.3, 3.2, 3.1]),
    (50, [4.0, 3.9, 3.7, 3.6, 3.6, 3.4]),
    (57, [4.3, 4.1, 4.0, 3.9, 3.8, 3.6]),
    (62, [4.5, 4.3, 4.1, 4.0, 3.9, 3.9]),
    (67, [4.7, 4.4, 4.3, 4.2, 4.1, 3.9]),
    (72, [4.8, 4.6, 4.4, 4.2, 4.2, 4.1]),
    (76, [4.9, 4.6, 4.5, 4.3, 4.3, 4.2]),
    (80, [5.0, 4.8, 4.6, 4.4, 4.3, 4.2]),
    (84, [5.1, 4.8, 4.6, 4.5, 4.4, 4.3]),
    (88, [5.2, 4.9, 4.7, 4.6, 4.4, 4.3]),
    (93, [5.3, 5.0, 4.8, 4.7, 4.5, 4.4]),
    (97, [5.4, 5.1, 4.8, 4.7, 4.5, 4.3]),
    (101, [5.5, 5.2, 5.0, 4.7, 4.6, 4.5]),
    (106, [5.6, 5.3, 5.0, 4.8, 4.6, 4.5]),
    (111, [5.7, 5.4, 5.1, 4.9, 4.7, 4.5]),
    (116, [5.8, 5.5, 5.2, 5.0, 4.8, 4.6]),
    (121, [6.0, 5.5, 5.3, 5.0, 4.8, 4.6]),
    (127, [6.1, 5.7, 5.3, 5.1, 4.9, 4.7]),
    (133, [6.2, 5.8, 5.4, 5.2, 5.0, 4.7]),
    (139, [6.3, 5.9, 5.6, 5.3, 5.0, 4.8]),
    (147, [6.5, 6.0, 5.7, 5.4, 5.1, 4.8]),
    (155, [6.7, 6.2, 5.8, 5.4, 5.2, 4.9]),
    (164, [6.8, 6.3, 5.9, 5.5, 5.3, 5.0]),
    (174, [7.0, 6.5, 6.0, 5.7, 5.4, 5.1]),
    (186, [7.3, 6.7, 6.2, 5.8, 5.5, 5.2]),
    (202, [7.6, 6.9, 6.4, 6.0, 5.6, 5.3]),
    (221, [8.0, 7.2, 6.6, 6.2, 5.9, 5.4]),
    (248, [8.5, 7.6, 7.0, 6.5, 6.1, 5.6]),
    (293, [9.5, 8.3, 7.5, 7.0, 6.5, 5.9]),
    (400, [10.4, 8.7, 7.9, 7.3, 6.7, 6.1]),
    (410, [10.7, 8.9, 7.9, 7.3, 6.7, 6.0]),
    (420, [10.3, 8.9, 7.9, 7.4, 6.8, 6.0]),
    (430, [11.2, 8.9, 8.0, 7.3, 6.8, 6.0]),
    (440, [12.0, 9.0, 8.0, 7.5, 6.9, 6.0]),
    (450, [11.3, 9.3, 8.2, 7.4, 7.0, 6.0]),
    (460, [12.3, 9.2, 8.3, 7.7, 6.9, 6.1]),
    (470, [10.6, 9.3, 8.3, 7.6, 7.0, 6.0]),
    (480, [11.7, 9.3, 8.4, 7.6, 7.1, 6.1]),
    (490, [11.6, 9.6, 8.4, 7.6, 7.2, 6.2]),
    (500, [12.1, 9.2, 8.4, 7.5, 7.1, 6.2]),
    (510, [12.3, 9.9, 8.5, 7.9, 7.1, 6.3]),
    (520, [12.0, 9.8, 8.7, 7.7, 7.1, 6.3]),
    (530, [12.0, 9.8, 8.7, 7.8, 7.2, 6.3]),
    (540, [11.3, 10.0, 8.8, 7.8, 7.4, 6.3]),
    (550, [12.2, 10.2, 8.8, 8.0, 7.4, 6.2]),
    (560, [13.8, 10.2, 8.7, 8.1, 7.2, 6.2]),
    (570, [15.4, 10.4, 8.9, 8.0, 7.3, 6.2]),
    (580, [12.7, 10.5, 9.1, 8.3, 7.3, 6.4]),
    (590, [12.5, 10.5, 9.2, 8.3, 7.2, 5.9]),
    (600, [13.7, 10.5, 8.9, 8.2, 7.6, 6.3]),
    (610, [15.4, 10.5, 9.1, 8.4, 7.5, 6.4]),
    (620, [16.4, 11.3, 9.2, 8.5, 7.5, 6.4]),
    (630, [14.1, 11.6, 9.4, 8.2, 7.3, 6.2]),
    (640, [14.8, 11.0, 9.1, 8.1, 7.5, 6.6]),
    (650, [14.2, 11.0, 9.2, 8.3, 7.5, 6.4]),
    (660, [15.0, 10.9, 9.2, 8.3, 7.5, 6.5]),
    (670, [14.2, 11.0, 9.3, 8.6, 7.6, 6.7]),
    (680, [16.7, 11.5, 9.8, 8.3, 7.4, 6.7]),
    (690, [15.0, 11.6, 9.8, 8.4, 7.8, 6.5]),
    (700, [16.6, 11.5, 9.5, 8.5, 7.8, 6.9]),
    (710, [14.5, 10.9, 9.7, 8.5, 7.8, 6.4]),
    (720, [16.5, 11.7, 9.5, 8.5, 7.6, 6.6]),
    (730, [18.2, 12.2, 9.9, 8.9, 8.2, 6.6]),
    (740, [17.5, 11.7, 9.9, 8.5, 7.9, 6.6]),
    (750, [17.5, 12.9, 10.2, 8.8, 8.1, 6.4]),
    (760, [19.2, 11.4, 9.9, 8.7, 8.3, 6.5]),
    (770, [17.3, 13.4, 10.4, 8.6, 8.2, 6.7]),
    (780, [23.9, 12.3, 10.4, 9.1, 7.9, 6.7]),
    (790, [15.6, 13.0, 10.7, 8.7, 8.0, 6.7]),
    (13975, [11.9, 10.0, 8.8, 8.1, 7.5, 6.7]),
];

/// Explicit (low, high, key) triglyceride ranges, checked in order.
///
/// First match wins. The 790-799 and 790-13975 entries overlap; the order
/// here is the inherited enumeration order and selects 790 for 790-799.
const TG_RANGES: [(i64, i64, i64); 70] = [
    (7, 49, 7),
    (50, 56, 50),
    (57, 61, 57),
    (62, 66, 62),
    (67, 71, 67),
    (72, 75, 72),
    (76, 79, 76),
    (80, 83, 80),
    (84, 87, 84),
    (88, 92, 88),
    (93, 96, 93),
    (97, 100, 97),
    (101, 105, 101),
    (106, 110, 106),
    (111, 115, 111),
    (116, 120, 116),
    (121, 126, 121),
    (127, 132, 127),
    (133, 138, 133),
    (139, 146, 139),
    (147, 154, 147),
    (155, 163, 155),
    (164, 173, 164),
    (174, 185, 174),
    (186, 201, 186),
    (202, 220, 202),
    (221, 247, 221),
    (248, 292, 248),
    (293, 399, 293),
    (400, 409, 400),
    (410, 419, 410),
    (420, 429, 420),
    (430, 439, 430),
    (440, 449, 440),
    (450, 459, 450),
    (460, 469, 460),
    (470, 479, 470),
    (480, 489, 480),
    (490, 499, 490),
    (500, 509, 500),
    (510, 519, 510),
    (520, 529, 520),
    (530, 539, 530),
    (540, 549, 540),
    (550, 559, 550),
    (560, 569, 560),
    (570, 579, 570),
    (580, 589, 580),
    (590, 599, 590),
    (600, 609, 600),
    (610, 619, 610),
    (620, 629, 620),
    (630, 639, 630),
    (640, 649, 640),
    (650, 659, 650),
    (660, 669, 660),
    (670, 679, 670),
    (680, 689, 680),
    (690, 699, 690),
    (700, 709, 700),
    (710, 719, 710),
    (720, 729, 720),
    (730, 739, 730),
    (740, 749, 740),
    (750, 759, 750),
    (760, 769, 760),
    (770, 779, 770),
    (780, 789, 780),
    (790, 799, 790),
    (790, 13975, 13975),
];

/// Select the triglyceride bracket key for a value
///
/// Walks the explicit ranges in order; if none matches, falls back to the
/// largest table key at or below the value, then to the smallest key.
fn triglyceride_bracket(triglycerides: i64) -> i64 {
    for &(low, high, key) in &TG_RANGES {
        if triglycerides >= low && triglycerides <= high {
            return key;
        }
    }

    MARTIN_TABLE
        .iter()
        .rev()
        .map(|&(key, _)| key)
        .find(|&key| key <= triglycerides)
        .unwrap_or(MARTIN_TABLE[0].0)
}

/// Select the non-HDL column index for a value
fn non_hdl_column(non_hdl: i64) -> usize {
    if non_hdl < 100 {
        0
    } else if non_hdl < 130 {
        1
    } else if non_hdl < 160 {
        2
    } else if non_hdl < 190 {
        3
    } else if non_hdl < 220 {
        4
    } else {
        5
    }
}

/// Look up the Martin divisor for integer-truncated triglyceride and
/// non-HDL values
///
/// Always yields a divisor; the bracket fallbacks cover values outside the
/// enumerated ranges.
pub fn get_divisor(triglycerides: i64, non_hdl: i64) -> f64 {
    let tg_key = triglyceride_bracket(triglycerides);
    let column = non_hdl_column(non_hdl);

    // The bracket key always comes from the table, so the scan cannot miss.
    let row = MARTIN_TABLE
        .iter()
        .find(|&&(key, _)| key == tg_key)
        .map(|&(_, row)| row)
        .unwrap_or(MARTIN_TABLE[0].1);

    let divisor = row[column];
    tracing::debug!(
        triglycerides,
        non_hdl,
        tg_key,
        column,
        divisor,
        "selected Martin divisor"
    );
    divisor
}
