// crates\mg_geo\src\transform.rs
//! WGS-84 / GCJ-02 / BD-09 坐标系转换
//!
//! GCJ-02（俗称"火星坐标"）是在 WGS-84 基础上叠加非线性偏移得到的
//! 坐标系；BD-09 在 GCJ-02 之上再做一次极坐标扰动。本模块提供六个
//! 方向的单点转换：
//!
//! - [`wgs84_to_gcj02`] / [`gcj02_to_wgs84`]
//! - [`gcj02_to_bd09`] / [`bd09_to_gcj02`]
//! - [`wgs84_to_bd09`] / [`bd09_to_wgs84`]
//!
//! # 算法特点
//!
//! - WGS→GCJ 偏移为经验多项式加三角级数，再按克拉索夫斯基椭球体
//!   在当地纬度的曲率半径换算为度
//! - GCJ→WGS 无闭式解，采用定点迭代反解（首步无条件执行），
//!   收敛容差 1e-6 度，上限 100 次
//! - BD-09 正反变换为度数空间中的极坐标扰动及其代数逆
//! - 中国范围以外 WGS↔GCJ 为恒等变换
//!
//! # 坐标约定
//!
//! 所有接口的参数和返回值均为 `(经度, 纬度)`，单位度。
//!
//! # 示例
//!
//! ```
//! use mg_geo::transform::{wgs84_to_gcj02, gcj02_to_wgs84};
//!
//! let (g_lon, g_lat) = wgs84_to_gcj02(116.404, 39.915).unwrap();
//! let (w_lon, w_lat) = gcj02_to_wgs84(g_lon, g_lat).unwrap();
//! assert!((w_lon - 116.404).abs() < 1e-5);
//! assert!((w_lat - 39.915).abs() < 1e-5);
//! ```

use crate::ellipsoid::Ellipsoid;
use crate::error::{GeoError, GeoResult};
use mg_foundation::float::{DEFAULT_CONVERGENCE_TOL, DEFAULT_MAX_ITERATIONS};
use std::f64::consts::PI;

// ============================================================================
// 常量
// ============================================================================

/// GCJ-02 偏移适用区域的最小经度 (度)
pub const CHINA_LON_MIN: f64 = 72.004;

/// GCJ-02 偏移适用区域的最大经度 (度)
pub const CHINA_LON_MAX: f64 = 137.8347;

/// GCJ-02 偏移适用区域的最小纬度 (度)
pub const CHINA_LAT_MIN: f64 = 0.8293;

/// GCJ-02 偏移适用区域的最大纬度 (度)
pub const CHINA_LAT_MAX: f64 = 55.8271;

/// 迭代反解的收敛容差 (度)
pub const INVERSE_CONVERGENCE_TOL: f64 = DEFAULT_CONVERGENCE_TOL;

/// 迭代反解的最大迭代次数
pub const MAX_INVERSE_ITERATIONS: usize = DEFAULT_MAX_ITERATIONS;

/// 经验偏移公式的展开原点：经度 (度)
const OFFSET_ORIGIN_LON: f64 = 105.0;

/// 经验偏移公式的展开原点：纬度 (度)
const OFFSET_ORIGIN_LAT: f64 = 35.0;

/// BD-09 经度附加偏移 (度)
const BD_LON_SHIFT: f64 = 0.0065;

/// BD-09 纬度附加偏移 (度)
const BD_LAT_SHIFT: f64 = 0.006;

/// BD-09 极径扰动幅值
const BD_Z_PERTURB: f64 = 2e-5;

/// BD-09 极角扰动幅值
const BD_THETA_PERTURB: f64 = 3e-6;

/// BD-09 扰动项角频率：x·π·3000/180
const BD_PERTURB_FREQ: f64 = PI * 3000.0 / 180.0;

// ============================================================================
// 区域判断与经验偏移
// ============================================================================

/// 判断坐标是否在中国范围以外
///
/// 范围取经度 [72.004, 137.8347]、纬度 [0.8293, 55.8271]（闭区间）。
/// 范围以外 GCJ-02 偏移不适用，WGS↔GCJ 为恒等变换。
#[inline]
#[must_use]
pub fn out_of_china(lon: f64, lat: f64) -> bool {
    !((CHINA_LON_MIN..=CHINA_LON_MAX).contains(&lon)
        && (CHINA_LAT_MIN..=CHINA_LAT_MAX).contains(&lat))
}

/// 纬度方向的经验偏移量（米级原始量，未经椭球换算）
///
/// 入参为相对展开原点的偏移坐标 x = lon-105, y = lat-35。
fn lat_offset(x: f64, y: f64) -> f64 {
    let mut ret =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// 经度方向的经验偏移量（米级原始量，未经椭球换算）
fn lon_offset(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// 验证经纬度为有限数值
#[inline]
pub(crate) fn check_lonlat(lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    if !lon.is_finite() {
        return Err(GeoError::non_finite_coordinate("经度", lon));
    }
    if !lat.is_finite() {
        return Err(GeoError::non_finite_coordinate("纬度", lat));
    }
    Ok((lon, lat))
}

// ============================================================================
// WGS-84 ↔ GCJ-02
// ============================================================================

/// WGS→GCJ 核心计算（入参已验证为有限值）
fn wgs84_to_gcj02_unchecked(lon: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lon, lat) {
        return (lon, lat);
    }

    let d_lat = lat_offset(lon - OFFSET_ORIGIN_LON, lat - OFFSET_ORIGIN_LAT);
    let d_lon = lon_offset(lon - OFFSET_ORIGIN_LON, lat - OFFSET_ORIGIN_LAT);

    // 按克拉索夫斯基椭球体在该纬度的曲率半径把偏移量换算为度：
    // 纬向除以子午圈半径 M，经向除以卯酉圈半径 N 乘 cosφ
    let rad_lat = lat.to_radians();
    let krassovsky = Ellipsoid::KRASSOVSKY;
    let d_lat = d_lat * 180.0 / (krassovsky.meridional_radius(rad_lat) * PI);
    let d_lon =
        d_lon * 180.0 / (krassovsky.prime_vertical_radius(rad_lat) * rad_lat.cos() * PI);

    (lon + d_lon, lat + d_lat)
}

/// WGS-84 -> GCJ-02
///
/// 中国范围以外返回原坐标。
///
/// # Errors
/// 坐标含 NaN/Inf 时返回错误
pub fn wgs84_to_gcj02(lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    let (lon, lat) = check_lonlat(lon, lat)?;
    Ok(wgs84_to_gcj02_unchecked(lon, lat))
}

/// GCJ-02 -> WGS-84（定点迭代反解）
///
/// 正向偏移无闭式逆，以目标点为初始猜测，反复用正向变换的残差
/// 修正估计：`w ← w - (wgs84_to_gcj02(w) - g)`。首次修正无条件执行，
/// 之后当两个分量的步长都小于 [`INVERSE_CONVERGENCE_TOL`] 时停止。
/// 对实际范围内的输入通常数次迭代即收敛。
///
/// # Errors
/// - 坐标含 NaN/Inf 时返回错误
/// - 超过 [`MAX_INVERSE_ITERATIONS`] 次仍未收敛时返回
///   [`GeoError::InverseNotConverged`]，不回退到未收敛的估计值
pub fn gcj02_to_wgs84(lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    let (g_lon, g_lat) = check_lonlat(lon, lat)?;

    let mut w_lon = g_lon;
    let mut w_lat = g_lat;
    for _ in 0..MAX_INVERSE_ITERATIONS {
        let (c_lon, c_lat) = wgs84_to_gcj02_unchecked(w_lon, w_lat);
        let next_lon = w_lon - (c_lon - g_lon);
        let next_lat = w_lat - (c_lat - g_lat);
        let delta_lon = next_lon - w_lon;
        let delta_lat = next_lat - w_lat;
        w_lon = next_lon;
        w_lat = next_lat;
        if delta_lon.abs() < INVERSE_CONVERGENCE_TOL && delta_lat.abs() < INVERSE_CONVERGENCE_TOL
        {
            return Ok((w_lon, w_lat));
        }
    }
    Err(GeoError::inverse_not_converged(MAX_INVERSE_ITERATIONS))
}

// ============================================================================
// GCJ-02 ↔ BD-09
// ============================================================================

/// GCJ-02 -> BD-09
///
/// 在度数空间做极坐标扰动：极径和极角各叠加一个小振幅三角扰动，
/// 再加固定偏移 (0.0065, 0.006)。注意极径、极角直接由经纬度度数
/// 构成，这是该坐标系的既定约定，逆变换依赖于此。
///
/// # Errors
/// 坐标含 NaN/Inf 时返回错误
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    let (lon, lat) = check_lonlat(lon, lat)?;

    let z = (lon * lon + lat * lat).sqrt() + BD_Z_PERTURB * (lat * BD_PERTURB_FREQ).sin();
    let theta = lat.atan2(lon) + BD_THETA_PERTURB * (lon * BD_PERTURB_FREQ).cos();

    Ok((z * theta.cos() + BD_LON_SHIFT, z * theta.sin() + BD_LAT_SHIFT))
}

/// BD-09 -> GCJ-02
///
/// [`gcj02_to_bd09`] 的代数逆：先减去固定偏移，再以扰动符号取反的
/// 同一极坐标公式还原。扰动项由减偏移后的坐标计算（而非真实原点），
/// 属于该坐标系约定俗成的近似逆，误差远小于 1e-6 度。
///
/// # Errors
/// 坐标含 NaN/Inf 时返回错误
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    let (lon, lat) = check_lonlat(lon, lat)?;

    let x = lon - BD_LON_SHIFT;
    let y = lat - BD_LAT_SHIFT;
    let z = (x * x + y * y).sqrt() - BD_Z_PERTURB * (y * BD_PERTURB_FREQ).sin();
    let theta = y.atan2(x) - BD_THETA_PERTURB * (x * BD_PERTURB_FREQ).cos();

    Ok((z * theta.cos(), z * theta.sin()))
}

// ============================================================================
// 复合变换
// ============================================================================

/// WGS-84 -> BD-09
///
/// 纯复合：先 [`wgs84_to_gcj02`] 再 [`gcj02_to_bd09`]，无独立公式。
///
/// # Errors
/// 坐标含 NaN/Inf 时返回错误
pub fn wgs84_to_bd09(lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    let (g_lon, g_lat) = wgs84_to_gcj02(lon, lat)?;
    gcj02_to_bd09(g_lon, g_lat)
}

/// BD-09 -> WGS-84
///
/// 纯复合：先 [`bd09_to_gcj02`] 再 [`gcj02_to_wgs84`]。
///
/// # Errors
/// - 坐标含 NaN/Inf 时返回错误
/// - 迭代反解不收敛时返回 [`GeoError::InverseNotConverged`]
pub fn bd09_to_wgs84(lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    let (g_lon, g_lat) = bd09_to_gcj02(lon, lat)?;
    gcj02_to_wgs84(g_lon, g_lat)
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_china_boundary() {
        // 边界为闭区间
        assert!(!out_of_china(72.004, 30.0));
        assert!(!out_of_china(137.8347, 30.0));
        assert!(!out_of_china(100.0, 0.8293));
        assert!(!out_of_china(100.0, 55.8271));

        assert!(out_of_china(72.0039, 30.0));
        assert!(out_of_china(137.835, 30.0));
        assert!(out_of_china(100.0, 0.8292));
        assert!(out_of_china(100.0, 55.828));
    }

    #[test]
    fn test_identity_outside_china() {
        // 纽约、伦敦、悉尼：逐位恒等
        let cases = [(-74.006, 40.7128), (-0.1276, 51.5072), (151.2093, -33.8688)];
        for (lon, lat) in cases {
            let (g_lon, g_lat) = wgs84_to_gcj02(lon, lat).expect("forward");
            assert_eq!(g_lon, lon);
            assert_eq!(g_lat, lat);
        }
    }

    #[test]
    fn test_offset_inside_china() {
        // 北京天安门附近，WGS→GCJ 偏移量级为千分之几度
        let (lon, lat) = (116.404, 39.915);
        let (g_lon, g_lat) = wgs84_to_gcj02(lon, lat).expect("forward");

        let d_lon = g_lon - lon;
        let d_lat = g_lat - lat;
        assert!(
            (0.004..0.008).contains(&d_lon),
            "经度偏移异常: {d_lon}"
        );
        assert!(
            (0.0005..0.003).contains(&d_lat),
            "纬度偏移异常: {d_lat}"
        );
    }

    #[test]
    fn test_round_trip_grid() {
        // 中国范围网格上 GCJ 反解回 WGS，误差在 1e-5 度以内
        let mut lon = 73.0;
        while lon <= 135.0 {
            let mut lat = 4.0;
            while lat <= 53.0 {
                let (g_lon, g_lat) = wgs84_to_gcj02(lon, lat).expect("forward");
                let (w_lon, w_lat) = gcj02_to_wgs84(g_lon, g_lat).expect("inverse");

                let err_lon = (w_lon - lon).abs();
                let err_lat = (w_lat - lat).abs();
                assert!(
                    err_lon < 1e-5 && err_lat < 1e-5,
                    "({lon}, {lat}): err_lon={err_lon:.2e}, err_lat={err_lat:.2e}"
                );
                lat += 7.0;
            }
            lon += 6.2;
        }
    }

    #[test]
    fn test_inverse_converges_quickly() {
        // 典型城市点，反解应正常返回（迭代上限内收敛）
        let cases = [
            (116.404, 39.915),  // 北京
            (121.4737, 31.2304), // 上海
            (113.2644, 23.1291), // 广州
            (87.6168, 43.8256),  // 乌鲁木齐
        ];
        for (lon, lat) in cases {
            let (g_lon, g_lat) = wgs84_to_gcj02(lon, lat).expect("forward");
            assert!(gcj02_to_wgs84(g_lon, g_lat).is_ok(), "({lon}, {lat}) 未收敛");
        }
    }

    #[test]
    fn test_bd09_round_trip() {
        let (lon, lat) = (116.41024, 39.91640);
        let (b_lon, b_lat) = gcj02_to_bd09(lon, lat).expect("to bd09");
        let (g_lon, g_lat) = bd09_to_gcj02(b_lon, b_lat).expect("from bd09");

        assert!((g_lon - lon).abs() < 1e-6, "lon mismatch: {g_lon}");
        assert!((g_lat - lat).abs() < 1e-6, "lat mismatch: {g_lat}");
    }

    #[test]
    fn test_bd09_shift_magnitude() {
        // BD 偏移由 (0.0065, 0.006) 主导，扰动项只有 1e-5 量级
        let (lon, lat) = (116.404, 39.915);
        let (b_lon, b_lat) = gcj02_to_bd09(lon, lat).expect("to bd09");

        assert!((b_lon - lon - BD_LON_SHIFT).abs() < 5e-4);
        assert!((b_lat - lat - BD_LAT_SHIFT).abs() < 5e-4);
    }

    #[test]
    fn test_bd09_to_gcj02_golden_vector() {
        // 固定回归用例：按文档公式逐字展开 bd09_to_gcj02(120, 40)
        let x: f64 = 120.0 - 0.0065;
        let y: f64 = 40.0 - 0.006;
        let z = (x * x + y * y).sqrt() - 2e-5 * (y * PI * 3000.0 / 180.0).sin();
        let theta = y.atan2(x) - 3e-6 * (x * PI * 3000.0 / 180.0).cos();
        let expected = (z * theta.cos(), z * theta.sin());

        let (g_lon, g_lat) = bd09_to_gcj02(120.0, 40.0).expect("from bd09");
        assert!((g_lon - expected.0).abs() < 1e-12);
        assert!((g_lat - expected.1).abs() < 1e-12);

        // 数值本身也应落在预期邻域
        assert!((g_lon - 119.9935).abs() < 1e-2);
        assert!((g_lat - 39.994).abs() < 1e-2);
    }

    #[test]
    fn test_composites_delegate_exactly() {
        // 复合变换与手工两步复合逐位一致
        let cases = [(116.404, 39.915), (103.84, 1.29), (-74.006, 40.7128)];
        for (lon, lat) in cases {
            let composite = wgs84_to_bd09(lon, lat).expect("wgs->bd");
            let (g_lon, g_lat) = wgs84_to_gcj02(lon, lat).expect("wgs->gcj");
            let manual = gcj02_to_bd09(g_lon, g_lat).expect("gcj->bd");
            assert_eq!(composite, manual);
        }

        let (b_lon, b_lat) = (116.42, 39.92);
        let composite = bd09_to_wgs84(b_lon, b_lat).expect("bd->wgs");
        let (g_lon, g_lat) = bd09_to_gcj02(b_lon, b_lat).expect("bd->gcj");
        let manual = gcj02_to_wgs84(g_lon, g_lat).expect("gcj->wgs");
        assert_eq!(composite, manual);
    }

    #[test]
    fn test_wgs84_to_bd09_round_trip() {
        let (lon, lat) = (116.404, 39.915);
        let (b_lon, b_lat) = wgs84_to_bd09(lon, lat).expect("wgs->bd");
        let (w_lon, w_lat) = bd09_to_wgs84(b_lon, b_lat).expect("bd->wgs");

        assert!((w_lon - lon).abs() < 1e-5);
        assert!((w_lat - lat).abs() < 1e-5);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(wgs84_to_gcj02(f64::NAN, 39.9).is_err());
        assert!(gcj02_to_wgs84(116.4, f64::INFINITY).is_err());
        assert!(gcj02_to_bd09(f64::NEG_INFINITY, 39.9).is_err());
        assert!(bd09_to_gcj02(116.4, f64::NAN).is_err());
        assert!(wgs84_to_bd09(f64::NAN, f64::NAN).is_err());
        assert!(bd09_to_wgs84(116.4, f64::NAN).is_err());
    }

    #[test]
    fn test_inverse_outside_china_is_identity() {
        // 范围外正向为恒等，反解首步残差即为零
        let (w_lon, w_lat) = gcj02_to_wgs84(-74.006, 40.7128).expect("inverse");
        assert_eq!(w_lon, -74.006);
        assert_eq!(w_lat, 40.7128);
    }
}
