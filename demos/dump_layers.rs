use anyhow::Result;
use std::time::Instant;

use yolov4_tiny_cfg::cfg_parser;

fn main() -> Result<()> {
    env_logger::init();

    // 解析するcfgファイル
    let cfg_path = "demos/yolov4-tiny.cfg";

    let start = Instant::now();

    // cfgを解析してレイヤレコードの列に変換する
    let layers = cfg_parser::parse_file(cfg_path)?;

    let end = start.elapsed();
    let t = end.as_secs_f64() * 1000.0;

    for (i, layer) in layers.iter().enumerate() {
        println!("#{:<2} {}", i, layer);
    }
    println!("{} layers, parse time: {:.03}ms", layers.len(), t);

    Ok(())
}
