use log::debug;

use mandelbrot_checksum::compute::{self, Params};

fn main() {
    env_logger::init();

    let threads = num_cpus::get();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .unwrap();
    debug!("row pool sized to {} threads", threads);

    let sum = compute::checksum_parallel(Params::CLASSIC);
    println!("{}", sum);
}
