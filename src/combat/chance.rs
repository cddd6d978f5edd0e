//! Fixed 2d6 lookup tables mapping a net bonus or threshold to a chance out
//! of 36. Total over all integers; callers special-case threshold 0
//! ("cannot critical") before consulting the critical table.

/// Chance out of 36 that an attack with the given net to-hit bonus lands.
pub fn to_hit_chance(net_bonus: i32) -> i32 {
    match net_bonus {
        bonus if bonus > 4 => 36,
        4 => 35,
        3 => 33,
        2 => 30,
        1 => 26,
        0 => 21,
        -1 => 15,
        -2 => 10,
        -3 => 6,
        -4 => 3,
        -5 => 1,
        _ => 0,
    }
}

/// Chance out of 36 that a landed hit's margin of victory reaches the given
/// critical-hit threshold. A threshold of 0 means the power cannot critical
/// and must be short-circuited by the caller; the table itself returns 0.
pub fn critical_hit_chance(threshold: i32) -> i32 {
    match threshold {
        threshold if threshold > 11 => 36,
        11 => 35,
        10 => 33,
        9 => 30,
        8 => 26,
        7 => 21,
        6 => 15,
        5 => 10,
        4 => 6,
        3 => 3,
        2 => 1,
        _ => 0,
    }
}
