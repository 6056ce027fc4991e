use std::ops::RangeInclusive;

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 以当前时间作为随机种子
pub fn wall_clock_seed() -> u64 {
    Local::now().timestamp_micros() as u64
}

/// 生成 `count` 个均匀分布在 `range` 内的柱高
pub fn generate(count: usize, range: RangeInclusive<u32>, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(range.clone())).collect()
}
