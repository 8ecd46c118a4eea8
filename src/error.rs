#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// このライブラリで発生し得るすべてのエラー。
///
/// 各バリアントは原因となった値を保持する。呼び出し側は [`Error::kind`] で
/// 失敗の種類だけを判定することもできる。
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("Latitude '{latitude}' is out of range")]
    LatitudeOutOfRange { latitude: f64 },

    #[error("Longitude '{longitude}' is out of range")]
    LongitudeOutOfRange { longitude: f64 },

    #[error("Geohash precision '{precision}' is out of range (valid: 1..=16)")]
    PrecisionOutOfRange { precision: u8 },

    #[error("Quadkey level '{level}' is out of range (valid: 1..=23)")]
    LevelOutOfRange { level: u8 },

    #[error("Length '{length}' is out of range (valid: {min}..={max})")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("Invalid geohash symbol '{symbol}' at index {index}")]
    InvalidSymbol { symbol: char, index: usize },

    #[error("Illegal quadkey digit '{symbol}' at index {index}")]
    IllegalSequence { symbol: char, index: usize },
}

/// [`Error`] を大まかに分類した種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// 緯度・経度、精度、ズームレベルが有効範囲外。
    OutOfRange,
    /// Geohash / Quadkey 文字列の長さが有効範囲外。
    InvalidLength,
    /// Geohash のアルファベットに含まれない文字。
    InvalidSymbol,
    /// `'0'..='3'` 以外の Quadkey 文字。
    IllegalSequence,
}

impl Error {
    /// このエラーの種類を返す。
    ///
    /// ```
    /// # use geo_logic::{Error, ErrorKind};
    /// let e = Error::LevelOutOfRange { level: 24 };
    /// assert_eq!(e.kind(), ErrorKind::OutOfRange);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LatitudeOutOfRange { .. }
            | Error::LongitudeOutOfRange { .. }
            | Error::PrecisionOutOfRange { .. }
            | Error::LevelOutOfRange { .. } => ErrorKind::OutOfRange,
            Error::InvalidLength { .. } => ErrorKind::InvalidLength,
            Error::InvalidSymbol { .. } => ErrorKind::InvalidSymbol,
            Error::IllegalSequence { .. } => ErrorKind::IllegalSequence,
        }
    }
}
