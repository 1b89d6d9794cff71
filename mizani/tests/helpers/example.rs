use crate::evolution::VariationOperator;
use crate::utils::{Float, Random};

/// A simple variation operator over fixed-size real vectors which rewards proximity
/// to the origin, used to exercise the search machinery in tests.
pub struct VectorOperator {
    dimension: usize,
}

impl VectorOperator {
    /// Creates a new instance of `VectorOperator`.
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl VariationOperator for VectorOperator {
    type Genome = Vec<Float>;

    fn create(&self, random: &dyn Random) -> Self::Genome {
        (0..self.dimension).map(|_| random.uniform_real(-1., 1.)).collect()
    }

    fn combine(&self, a: &Self::Genome, b: &Self::Genome, random: &dyn Random) -> Self::Genome {
        a.iter().zip(b.iter()).map(|(&x, &y)| if random.is_head_not_tails() { x } else { y }).collect()
    }

    fn mutate(&self, mut genome: Self::Genome, random: &dyn Random) -> Self::Genome {
        let index = random.uniform_int(0, genome.len() as i32 - 1) as usize;
        genome[index] += random.uniform_real(-0.1, 0.1);

        genome
    }

    fn evaluate(&self, genome: &Self::Genome) -> Float {
        -genome.iter().map(|&value| value * value).sum::<Float>()
    }
}
