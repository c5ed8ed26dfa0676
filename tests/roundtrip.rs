//! End-to-end checks through the public API

use matsubara_fourier::{apply, Complex64, IwToTau, Statistics, TauToIw};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_giw(niw: usize, seed: u64) -> Vec<Complex64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..niw)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

#[test]
fn roundtrip_through_public_api() {
    let (niw, ntau, beta) = (8, 32, 2.2);
    let giw = random_giw(niw, 17);

    let mut forward = IwToTau::new(niw, ntau, beta, Statistics::Fermionic, true);
    let mut inverse = TauToIw::new(ntau, niw, beta, Statistics::Fermionic, true);

    assert_eq!(forward.in_size(), niw);
    assert_eq!(forward.out_size(), ntau);
    assert_eq!(inverse.in_size(), ntau);
    assert_eq!(inverse.out_size(), niw);

    let gtau = apply(&mut forward, &giw).expect("sizes match");
    let back = apply(&mut inverse, &gtau).expect("sizes match");

    for k in 0..niw {
        let diff = (back[k] - giw[k]).norm();
        assert!(
            diff < 1e-10,
            "frequency {}: got {} expected {} diff={}",
            k,
            back[k],
            giw[k],
            diff
        );
    }
}

#[test]
fn accelerated_and_naive_converters_interchange() {
    // a signal sent to time domain by the accelerated converter comes back
    // through the naive inverse, and vice versa
    let (niw, ntau, beta) = (8, 32, 1.0);
    let giw = random_giw(niw, 23);

    let mut forward_fast = IwToTau::new(niw, ntau, beta, Statistics::Fermionic, true);
    let mut inverse_naive = TauToIw::new(ntau, niw, beta, Statistics::Fermionic, false);

    let gtau = apply(&mut forward_fast, &giw).unwrap();
    let back = apply(&mut inverse_naive, &gtau).unwrap();

    for k in 0..niw {
        assert!(
            (back[k] - giw[k]).norm() < 1e-10,
            "frequency {}: got {} expected {}",
            k,
            back[k],
            giw[k]
        );
    }
}
