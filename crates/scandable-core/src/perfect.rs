//! n-完全数（n-perfect）判定：真因数之和等于 n 的数
//! 与扫描流水线相互独立，核心不依赖本模块。

/// 真因数（不含自身）之和。`n <= 1` 时没有真因数，和为 0。
pub fn divisor_sum(n: u64) -> u64 {
    let mut sum = 0;
    for i in 1..n {
        if n % i == 0 {
            sum += i;
        }
    }
    sum
}

/// 判定 `number` 是否为 n-完全数：真因数之和恰好等于 `target`。
/// 经典完全数即 `target == number` 的情形（6、28、496 …）。
pub fn is_perfect(number: u64, target: u64) -> bool {
    divisor_sum(number) == target
}
