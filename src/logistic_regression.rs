use crate::dataset::{Sample, FEATURES};
use ndarray::{Array1, ArrayView1};

pub struct LogisticRegression {
    pub weights: Array1<f64>,
    pub bias: f64,
    pub learning_rate: f64,
    pub l2_regularization: f64,
}

impl LogisticRegression {
    pub fn new(learning_rate: f64, l2_regularization: f64) -> Self {
        Self {
            weights: Array1::zeros(FEATURES),
            bias: 0.0,
            learning_rate,
            l2_regularization,
        }
    }

    pub fn fit(&mut self, samples: &[Sample], number_of_epochs: usize) {
        for _ in 0..number_of_epochs {
            self.step(samples);
        }
    }

    pub fn predict(&self, features: &[f64; FEATURES]) -> u8 {
        u8::from(self.predict_probability(features) > 0.5)
    }

    fn predict_probability(&self, features: &[f64; FEATURES]) -> f64 {
        let dot_product = ArrayView1::from(features).dot(&self.weights) + self.bias;

        1.0 / (1.0 + (-dot_product).exp())
    }

    fn step(&mut self, samples: &[Sample]) {
        let (mut weight_gradient, bias_gradient) = self.compute_loss_gradient(samples);

        // bias stays unpenalized
        weight_gradient += &(self.l2_regularization * &self.weights);

        self.weights = &self.weights - self.learning_rate * weight_gradient;
        self.bias -= self.learning_rate * bias_gradient;
    }

    fn compute_loss_gradient(&self, samples: &[Sample]) -> (Array1<f64>, f64) {
        let mut weight_gradient = Array1::zeros(FEATURES);
        let mut bias_gradient = 0.0;
        let n_samples = samples.len() as f64;

        for sample in samples {
            let residual = self.predict_probability(&sample.features) - f64::from(sample.label);

            let sample_features = ArrayView1::from(&sample.features);
            weight_gradient.zip_mut_with(&sample_features, |current_gradient, &feature_value| {
                *current_gradient += feature_value * residual;
            });
            bias_gradient += residual;
        }

        (weight_gradient / n_samples, bias_gradient / n_samples)
    }
}

pub fn accuracy(predictions: &[u8], labels: &[u8]) -> f64 {
    let correct_predictions = predictions
        .iter()
        .zip(labels)
        .filter(|(predicted, actual)| predicted == actual)
        .count();

    correct_predictions as f64 / predictions.len() as f64
}
