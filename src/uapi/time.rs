/// 用于指定秒和纳秒精度的时间点。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpec {
    /// 秒 (seconds)
    pub tv_sec: i64,
    /// 纳秒 (nanoseconds)
    pub tv_nsec: i64,
}

impl TimeSpec {
    pub const fn new(tv_sec: i64, tv_nsec: i64) -> Self {
        TimeSpec { tv_sec, tv_nsec }
    }

    pub const fn zero() -> Self {
        TimeSpec {
            tv_sec: 0,
            tv_nsec: 0,
        }
    }
}
