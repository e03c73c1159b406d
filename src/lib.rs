//! # YOLOv4-tiny 向け Darknet cfg パーサ
//!
//! このクレートは、Darknet形式のテキスト設定ファイル (.cfg) を解析し、
//! レイヤごとのパラメータレコードの列に変換するためのRustライブラリです。
//!
//! ## 主な機能
//!
//! 1. **cfgテキストの解析**: セクションヘッダと `key=value` 形式の行を文書の順に読み取ります。
//! 2. **既知レイヤのデフォルト値**: convolutional / route / maxpool / upsample のセクションにはデフォルト値を事前に設定します。
//! 3. **レイヤレコードの出力**: 解析結果を文書内の出現順に並んだレコード列として返します。
//!
//! 出力されたレコード列は、モデル構築側 (本クレートの対象外) が `name` キーで
//! 分岐して利用することを想定しています。値はすべて文字列のまま保持され、
//! 数値への変換は利用側に委ねられます。
//!
//! ## Example
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use yolov4_tiny_cfg::cfg_parser;
//!
//! let doc = "[convolutional]\nfilters=32\nsize=3\n";
//! let layers = cfg_parser::parse(doc)?;
//! assert_eq!(layers[0].get("filters"), Some("32"));
//! # Ok(())
//! # }
//! ```

pub mod cfg_parser;
pub mod error;
pub mod layer_record;

mod defaults;
