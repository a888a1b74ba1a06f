use rand_chacha::{rand_core::RngCore, ChaCha8Rng};

use crate::Rgb;

/// The fixed set of colours an engine draws its particles from.
#[derive(Debug, Clone)]
pub struct Palette(Vec<Rgb>);

impl Palette {
    /// Generates `size` bright colours: one channel saturated, the other two random,
    /// with the channel order shuffled.
    pub fn generate(size: usize, rng: &mut ChaCha8Rng) -> Palette {
        let colors = (0..size.max(1))
            .map(|_| {
                let mut channels = [255, rng.next_u32() as u8, rng.next_u32() as u8];

                for i in (1..channels.len()).rev() {
                    let j = (rng.next_u32() as usize) % (i + 1);
                    channels.swap(i, j);
                }

                Rgb(channels[0], channels[1], channels[2])
            })
            .collect();

        Palette(colors)
    }

    pub fn pick(&self, rng: &mut ChaCha8Rng) -> Rgb {
        self.0[(rng.next_u32() as usize) % self.0.len()]
    }

    #[cfg(test)]
    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }
}
