use triangles::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = WindowParams::default();
    let code = launch(&mut NativePlatform, &params);
    std::process::exit(code);
}
