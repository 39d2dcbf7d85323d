use qnoise::{
    dataset::{generate_features, perturb_labels},
    logistic_regression::{accuracy, LogisticRegression},
    qubit::{BitSource, HadamardCircuit},
    split::split,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const NUM_BITS: usize = 100;
    const SEED: u64 = 42;
    const TRAIN_RATIO: f64 = 0.8;

    let mut circuit = HadamardCircuit::new(StdRng::from_entropy());
    let bits = circuit.measure_bits(NUM_BITS);
    println!("quantum random bits: {bits:?}");

    // one classical seed, threaded through generation and perturbation
    let mut rng = StdRng::seed_from_u64(SEED);
    let features = generate_features(&mut rng, NUM_BITS);
    let samples = perturb_labels(&features, &bits, &mut rng)?;

    let (train_samples, test_samples) = split(&samples, TRAIN_RATIO)?;

    const LEARNING_RATE: f64 = 0.5;
    const L2_REGULARIZATION: f64 = 0.01;
    const EPOCHS: usize = 1000;

    let mut model = LogisticRegression::new(LEARNING_RATE, L2_REGULARIZATION);
    model.fit(train_samples, EPOCHS);

    let predictions: Vec<u8> = test_samples
        .iter()
        .map(|sample| model.predict(&sample.features))
        .collect();
    let actual_labels: Vec<u8> = test_samples.iter().map(|sample| sample.label).collect();

    let accuracy = accuracy(&predictions, &actual_labels);
    println!("model accuracy: {accuracy:.2}");

    const SHOWN_PREDICTIONS: usize = 5;
    let shown = SHOWN_PREDICTIONS.min(predictions.len());
    println!("sample predictions: {:?}", &predictions[..shown]);
    println!("actual labels: {:?}", &actual_labels[..shown]);

    Ok(())
}
