use crate::encoder::format_info;
use crate::models::{BitMatrix, ECLevel, MaskPattern};
use rayon::prelude::*;

/// XOR a mask pattern onto the data modules. Reserved modules are never
/// touched. Self-inverse: applying the same mask twice restores the grid.
pub fn apply_mask(modules: &mut BitMatrix, reserved: &BitMatrix, mask: MaskPattern) {
    let size = modules.width();
    for y in 0..size {
        for x in 0..size {
            if !reserved.get(x, y) && mask.is_masked(y, x) {
                modules.toggle(x, y);
            }
        }
    }
}

/// Total penalty of a fully drawn candidate (mask applied, format bits
/// written), summing the four rules from the standard.
pub fn penalty_score(modules: &BitMatrix) -> u32 {
    penalty_runs(modules) + penalty_blocks(modules) + penalty_finder_like(modules)
        + penalty_balance(modules)
}

/// Score all eight mask candidates and return the winner with its fully
/// masked grid. Candidates are independent, so they score in parallel;
/// the argmin is taken afterwards in ascending id order with strict-less
/// comparison, so equal scores always keep the lower id.
pub fn select_mask(
    modules: &BitMatrix,
    reserved: &BitMatrix,
    ec_level: ECLevel,
) -> (MaskPattern, BitMatrix) {
    let mut candidates: Vec<(MaskPattern, BitMatrix, u32)> = MaskPattern::ALL
        .into_par_iter()
        .map(|mask| {
            let mut candidate = modules.clone();
            apply_mask(&mut candidate, reserved, mask);
            format_info::draw_format_info(&mut candidate, ec_level, mask);
            let score = penalty_score(&candidate);
            (mask, candidate, score)
        })
        .collect();

    let mut winner = 0;
    for i in 1..candidates.len() {
        if candidates[i].2 < candidates[winner].2 {
            winner = i;
        }
    }
    let (mask, candidate, _) = candidates.swap_remove(winner);
    (mask, candidate)
}

/// Rule 1: runs of 5 or more same-color modules in a row or column,
/// penalty 3 + (length - 5) each.
fn penalty_runs(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let mut penalty = 0;
    for major in 0..size {
        let mut row_color = modules.get(0, major);
        let mut row_run = 1u32;
        let mut col_color = modules.get(major, 0);
        let mut col_run = 1u32;
        for minor in 1..size {
            let row = modules.get(minor, major);
            if row == row_color {
                row_run += 1;
            } else {
                penalty += run_penalty(row_run);
                row_color = row;
                row_run = 1;
            }
            let col = modules.get(major, minor);
            if col == col_color {
                col_run += 1;
            } else {
                penalty += run_penalty(col_run);
                col_color = col;
                col_run = 1;
            }
        }
        penalty += run_penalty(row_run) + run_penalty(col_run);
    }
    penalty
}

fn run_penalty(run: u32) -> u32 {
    if run >= 5 { 3 + (run - 5) } else { 0 }
}

/// Rule 2: every 2x2 block of same-color modules, penalty 3 each.
/// Overlapping blocks all count.
fn penalty_blocks(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let mut penalty = 0;
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let c = modules.get(x, y);
            if modules.get(x + 1, y) == c
                && modules.get(x, y + 1) == c
                && modules.get(x + 1, y + 1) == c
            {
                penalty += 3;
            }
        }
    }
    penalty
}

// The 1:1:3:1:1 finder ratio as an 11-module window, with the 4-light
// margin on either end.
const FINDER_AHEAD: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];
const FINDER_BEHIND: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];

/// Rule 3: patterns that mimic a finder (dark 1:1:3:1:1 run with four
/// light modules before or after), penalty 40 each, in both directions.
fn penalty_finder_like(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    if size < 11 {
        return 0;
    }
    let mut penalty = 0;
    for major in 0..size {
        for start in 0..=size - 11 {
            let row_hit = |pattern: &[bool; 11]| {
                (0..11).all(|k| modules.get(start + k, major) == pattern[k])
            };
            let col_hit = |pattern: &[bool; 11]| {
                (0..11).all(|k| modules.get(major, start + k) == pattern[k])
            };
            if row_hit(&FINDER_AHEAD) || row_hit(&FINDER_BEHIND) {
                penalty += 40;
            }
            if col_hit(&FINDER_AHEAD) || col_hit(&FINDER_BEHIND) {
                penalty += 40;
            }
        }
    }
    penalty
}

/// Rule 4: dark-module balance. 10 points per 5% step the dark proportion
/// deviates from 50%.
fn penalty_balance(modules: &BitMatrix) -> u32 {
    let size = modules.width();
    let total = (size * size) as u64;
    let dark = modules.count_ones() as u64;
    // floor(|dark% - 50| / 5) without rounding the percentage first:
    // |dark * 100 - total * 50| / (total * 5) = |dark * 20 - total * 10| / total
    let steps = (dark * 20).abs_diff(total * 10) / total;
    steps as u32 * 10
}
