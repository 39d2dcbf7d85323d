use rand::Rng;

pub trait BitSource {
    fn measure_bits(&mut self, count: usize) -> Vec<u8>;
}

pub struct HadamardCircuit<R> {
    rng: R,
}

impl<R: Rng> HadamardCircuit<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    // H|0> = (|0> + |1>) / sqrt(2)
    fn measure_once(&mut self) -> u8 {
        let state = apply_hadamard([1.0, 0.0]);
        let probability_of_one = state[1] * state[1];

        u8::from(self.rng.gen::<f64>() < probability_of_one)
    }
}

impl<R: Rng> BitSource for HadamardCircuit<R> {
    fn measure_bits(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.measure_once()).collect()
    }
}

fn apply_hadamard(amplitudes: [f64; 2]) -> [f64; 2] {
    let scale = std::f64::consts::FRAC_1_SQRT_2;

    [
        scale * (amplitudes[0] + amplitudes[1]),
        scale * (amplitudes[0] - amplitudes[1]),
    ]
}
