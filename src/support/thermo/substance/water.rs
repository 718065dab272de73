use super::{LatentHeatRow, SegmentRow, Substance};

/// Water from the melting point to 1700 K at atmospheric pressure.
///
/// - Liquid, 273.15–373.15 K: constant `cp`.
/// - Vaporization at 373.15 K.
/// - Vapor, 373.15–500 K: constant mean `cp`.
/// - Vapor, 500–1700 K: NIST Chemistry WebBook Shomate fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl Substance for Water {
    const HEAT_CAPACITY: &'static [SegmentRow] = &[
        SegmentRow {
            min_kelvin: 273.15,
            max_kelvin: 373.15,
            coefficients: &[75.38],
        },
        SegmentRow {
            min_kelvin: 373.15,
            max_kelvin: 500.0,
            coefficients: &[34.7],
        },
        SegmentRow {
            min_kelvin: 500.0,
            max_kelvin: 1700.0,
            coefficients: &[
                30.09200, 6.832514, 6.793435, -2.534480, 0.082139, -250.8810, 223.3967, -241.8264,
            ],
        },
    ];

    const LATENT_HEATS: &'static [LatentHeatRow] = &[LatentHeatRow {
        kelvin: 373.15,
        joule_per_mole: 40_650.0,
    }];
}
