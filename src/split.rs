use crate::dataset::Sample;
use crate::error::PipelineError;

pub fn split(
    samples: &[Sample],
    train_ratio: f64,
) -> Result<(&[Sample], &[Sample]), PipelineError> {
    if samples.is_empty() {
        return Err(PipelineError::EmptySplit);
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let train_size = (samples.len() as f64 * train_ratio) as usize;

    Ok(samples.split_at(train_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FEATURES;

    fn samples(count: usize) -> Vec<Sample> {
        (0..count)
            .map(|i| Sample {
                features: [i as f64; FEATURES],
                label: 0,
            })
            .collect()
    }

    #[test]
    fn boundary_is_the_floor_of_the_ratio() {
        for (count, expected_train_size) in [(100, 80), (10, 8), (7, 5), (2, 1)] {
            let samples = samples(count);

            let (train, test) = split(&samples, 0.8).unwrap();

            assert_eq!(train.len(), expected_train_size);
            assert_eq!(test.len(), count - expected_train_size);
        }
    }

    #[test]
    fn partition_covers_the_dataset_in_order() {
        let samples = samples(25);

        let (train, test) = split(&samples, 0.8).unwrap();

        let rejoined: Vec<Sample> = train.iter().chain(test).copied().collect();
        assert_eq!(rejoined, samples);
    }

    #[test]
    fn empty_dataset_fails_fast() {
        assert_eq!(split(&[], 0.8).unwrap_err(), PipelineError::EmptySplit);
    }
}
