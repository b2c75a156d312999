use arcstr::ArcStr;
use divan::Bencher;
use ecow::EcoVec;
use zstring::ZString;

fn main() {
    divan::main();
}

const S: &[u8] = &[42; 42];

#[divan::bench_group(sample_count = 10_000)]
mod from_slice {
    use super::*;

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_zstring_from_slice(n: usize) -> ZString {
        ZString::from_slice(&S[0..n])
    }

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_vec_from_slice(n: usize) -> Vec<u8> {
        Vec::from(&S[0..n])
    }

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_arcstr_from_slice(n: usize) -> ArcStr {
        ArcStr::from(unsafe { std::str::from_utf8_unchecked(&S[0..n]) })
    }

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_ecow_from_slice(n: usize) -> EcoVec<u8> {
        EcoVec::from(&S[0..n])
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod clone {
    use super::*;

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_zstring_clone(b: Bencher, n: usize) {
        let s = ZString::from_slice(&S[0..n]);
        b.bench(|| s.clone());
    }

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_vec_clone(b: Bencher, n: usize) {
        let s = Vec::from(&S[0..n]);
        b.bench(|| s.clone());
    }

    #[divan::bench(args = [0, 1, 16, 23, 32, 42])]
    fn bench_ecow_clone(b: Bencher, n: usize) {
        let s = EcoVec::from(&S[0..n]);
        b.bench(|| s.clone());
    }
}

#[divan::bench_group(sample_count = 10_000)]
mod push {
    use super::*;

    #[divan::bench(args = [1, 16, 23, 32, 42])]
    fn bench_zstring_push(b: Bencher, n: usize) {
        b.with_inputs(ZString::new).bench_local_values(|mut s| {
            for &unit in &S[0..n] {
                s.push(unit);
            }
            s
        });
    }

    #[divan::bench(args = [1, 16, 23, 32, 42])]
    fn bench_vec_push(b: Bencher, n: usize) {
        b.with_inputs(Vec::new).bench_local_values(|mut s| {
            for &unit in &S[0..n] {
                s.push(unit);
            }
            s
        });
    }

    #[divan::bench(args = [1, 16, 23, 32, 42])]
    fn bench_ecow_push(b: Bencher, n: usize) {
        b.with_inputs(EcoVec::new).bench_local_values(|mut s| {
            for &unit in &S[0..n] {
                s.push(unit);
            }
            s
        });
    }
}
