use crate::error::PipelineError;
use rand::Rng;

pub const FEATURES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub features: [f64; FEATURES],
    pub label: u8,
}

pub fn generate_features<R: Rng>(rng: &mut R, count: usize) -> Vec<[f64; FEATURES]> {
    (0..count)
        .map(|_| {
            let mut sample_features = [0.0; FEATURES];
            for feature in &mut sample_features {
                *feature = rng.gen::<f64>();
            }

            sample_features
        })
        .collect()
}

pub fn perturb_labels<R: Rng>(
    features: &[[f64; FEATURES]],
    bits: &[u8],
    rng: &mut R,
) -> Result<Vec<Sample>, PipelineError> {
    if features.len() != bits.len() {
        return Err(PipelineError::LengthMismatch {
            features: features.len(),
            bits: bits.len(),
        });
    }

    features
        .iter()
        .zip(bits)
        .enumerate()
        .map(|(index, (&sample_features, &bit))| {
            let label = match bit {
                0 => 0,
                1 => rng.gen_range(0..=1),
                value => return Err(PipelineError::BitOutOfDomain { index, value }),
            };

            Ok(Sample {
                features: sample_features,
                label,
            })
        })
        .collect()
}
