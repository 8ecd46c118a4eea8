//! 2点間の距離、方位と距離から求める到達点、測地系の補正。
//!
//! 距離は楕円体による近似式、到達点は長半径を半径とする球面の式で求めており、
//! 両者は異なるモデルに基づく。

/// 楕円体近似による2点間の距離。
pub mod distance;

/// 基点・方位・距離から到達点を求める `GeodesicRay` 型。
pub mod ray;

/// 日本測地系への簡易補正。
pub mod datum;
