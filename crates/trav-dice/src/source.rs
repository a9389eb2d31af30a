//! Where raw die faces come from.

use rand::Rng;

/// Number of faces on the only die this engine rolls.
pub const SIDES: i32 = 6;

/// A supplier of six-sided die faces.
///
/// Every [`rand::Rng`] is a face source. Tests can plug in a scripted source
/// to pin the raw draws.
pub trait FaceSource {
    /// Draw one face in `1..=6`.
    fn next_face(&mut self) -> i32;
}

impl<R: Rng> FaceSource for R {
    fn next_face(&mut self) -> i32 {
        self.random_range(0..SIDES) + 1
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedFaces;

#[cfg(test)]
mod scripted {
    use super::*;

    /// Replays a fixed list of faces, panicking when it runs dry.
    #[derive(Debug)]
    pub(crate) struct ScriptedFaces<I: Iterator<Item = i32>> {
        faces: I,
    }

    impl<I: Iterator<Item = i32>> ScriptedFaces<I> {
        pub fn new(faces: impl IntoIterator<IntoIter = I>) -> Self {
            Self {
                faces: faces.into_iter(),
            }
        }
    }

    impl<I: Iterator<Item = i32>> FaceSource for ScriptedFaces<I> {
        fn next_face(&mut self) -> i32 {
            match self.faces.next() {
                Some(face) if (1..=SIDES).contains(&face) => face,
                Some(face) => panic!("scripted face {face} is not a d6 face"),
                None => panic!("scripted faces exhausted"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rng_faces_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let face = rng.next_face();
            assert!((1..=SIDES).contains(&face), "face {face} out of range");
        }
    }

    #[test]
    fn scripted_faces_replay_in_order() {
        let mut source = ScriptedFaces::new(vec![1, 3, 6]);
        assert_eq!(source.next_face(), 1);
        assert_eq!(source.next_face(), 3);
        assert_eq!(source.next_face(), 6);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn scripted_faces_run_dry() {
        let mut source = ScriptedFaces::new(Vec::new());
        source.next_face();
    }
}
