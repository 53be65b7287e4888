// crates\mg_geo\src\ellipsoid.rs
//! 椭球体定义
//!
//! 提供地球椭球体参数。GCJ-02 偏移算法基于克拉索夫斯基椭球体，
//! 同时保留 WGS84、CGCS2000 供参考和测试。
//!
//! # 示例
//!
//! ```
//! use mg_geo::ellipsoid::Ellipsoid;
//!
//! let krassovsky = Ellipsoid::KRASSOVSKY;
//! println!("长半轴: {} m", krassovsky.a);
//! println!("第一偏心率平方: {}", krassovsky.e2());
//! ```

use serde::{Deserialize, Serialize};

/// 地球椭球体
///
/// 定义椭球体的几何参数，并提供派生参数的计算方法。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// 长半轴 (m)
    pub a: f64,
    /// 扁率 (flattening)
    pub f: f64,
}

impl Ellipsoid {
    // ========================================================================
    // 预定义椭球体
    // ========================================================================

    /// 克拉索夫斯基椭球体 (北京54坐标系)
    ///
    /// - 长半轴: 6378245.0 m
    /// - 扁率: 1/298.3
    ///
    /// GCJ-02 偏移公式的椭球改正即基于此椭球体。
    pub const KRASSOVSKY: Self = Self {
        a: 6_378_245.0,
        f: 1.0 / 298.3,
    };

    /// WGS84 椭球体 (GPS 标准)
    ///
    /// - 长半轴: 6378137.0 m
    /// - 扁率: 1/298.257223563
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        f: 1.0 / 298.257_223_563,
    };

    /// CGCS2000 椭球体 (中国大地坐标系)
    ///
    /// - 长半轴: 6378137.0 m
    /// - 扁率: 1/298.257222101
    ///
    /// 注意：与 WGS84 极为相似，扁率微有差异
    pub const CGCS2000: Self = Self {
        a: 6_378_137.0,
        f: 1.0 / 298.257_222_101,
    };

    // ========================================================================
    // 构造方法
    // ========================================================================

    /// 从长半轴和扁率创建椭球体
    #[must_use]
    pub const fn new(a: f64, f: f64) -> Self {
        Self { a, f }
    }

    /// 从长半轴和短半轴创建椭球体
    #[must_use]
    pub fn from_semi_axes(a: f64, b: f64) -> Self {
        let f = (a - b) / a;
        Self { a, f }
    }

    // ========================================================================
    // 派生参数（几何常量）
    // ========================================================================

    /// 短半轴 b = a(1-f)
    #[inline]
    #[must_use]
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// 第一偏心率的平方 e² = 2f - f²
    #[inline]
    #[must_use]
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// 第一偏心率 e = √e²
    #[inline]
    #[must_use]
    pub fn e(&self) -> f64 {
        self.e2().sqrt()
    }

    /// 子午圈曲率半径（在纬度 φ 处）
    ///
    /// M = a(1-e²) / (1-e²sin²φ)^(3/2)
    #[inline]
    #[must_use]
    pub fn meridional_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        let e2 = self.e2();
        self.a * (1.0 - e2) / (1.0 - e2 * sin_lat * sin_lat).powf(1.5)
    }

    /// 卯酉圈曲率半径（在纬度 φ 处）
    ///
    /// N = a / √(1-e²sin²φ)
    #[inline]
    #[must_use]
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        let e2 = self.e2();
        self.a / (1.0 - e2 * sin_lat * sin_lat).sqrt()
    }
}

impl Default for Ellipsoid {
    /// 默认为克拉索夫斯基椭球体（本引擎的工作椭球体）
    fn default() -> Self {
        Self::KRASSOVSKY
    }
}

impl std::fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ellipsoid(a={}, f=1/{:.6})", self.a, 1.0 / self.f)
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_krassovsky_parameters() {
        let e = Ellipsoid::KRASSOVSKY;

        // 验证长半轴
        assert!((e.a - 6_378_245.0).abs() < 1e-6);

        // 验证短半轴 b = a(1-f)
        let b_expected = 6_378_245.0 * (1.0 - 1.0 / 298.3);
        assert!((e.b() - b_expected).abs() < 1e-6);

        // 第一偏心率平方的两种等价写法: 2f-f² 与 1-b²/a²
        let ee = 1.0 - (e.b() * e.b()) / (e.a * e.a);
        assert!((e.e2() - ee).abs() < 1e-15);

        // 常用文献值约 0.00669342162296594
        assert!((e.e2() - 0.006_693_421_622_965_94).abs() < 1e-12);
    }

    #[test]
    fn test_cgcs2000_vs_wgs84() {
        let wgs84 = Ellipsoid::WGS84;
        let cgcs = Ellipsoid::CGCS2000;

        // 长半轴相同
        assert_eq!(wgs84.a, cgcs.a);

        // 扁率略有不同
        assert!((wgs84.f - cgcs.f).abs() > 1e-12);
        assert!((wgs84.f - cgcs.f).abs() < 1e-9);
    }

    #[test]
    fn test_curvature_radius() {
        let e = Ellipsoid::KRASSOVSKY;

        // 赤道处
        let m_equator = e.meridional_radius(0.0);
        let n_equator = e.prime_vertical_radius(0.0);

        // N > M 在赤道
        assert!(n_equator > m_equator);

        // N(0) = a
        assert!((n_equator - e.a).abs() < 1e-6);

        // 极点处 N = a/√(1-e²)
        let n_pole = e.prime_vertical_radius(std::f64::consts::FRAC_PI_2);
        assert!((n_pole - e.a / (1.0 - e.e2()).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_from_semi_axes() {
        let k = Ellipsoid::KRASSOVSKY;
        let e = Ellipsoid::from_semi_axes(k.a, k.b());
        assert!((e.f - k.f).abs() < 1e-12);
    }

    #[test]
    fn test_default_is_krassovsky() {
        assert_eq!(Ellipsoid::default(), Ellipsoid::KRASSOVSKY);
    }
}
