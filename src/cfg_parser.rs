//! Darknet形式のcfgテキストを解析するモジュール

use std::mem;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, trace};

use crate::defaults;
use crate::error::CfgError;
use crate::layer_record::LayerRecord;

/// cfg文書を解析し、レイヤレコードの列に変換します。
///
/// 各行は空行・`#` で始まるコメント・`[name]` 形式のセクションヘッダ・
/// `key=value` 形式のディレクティブのいずれかとして解釈されます。
/// 行全体は解釈の前に小文字化されるため、ヘッダ名とキーと値はすべて
/// 小文字で格納されます。
///
/// 既知のレイヤ種別 (convolutional / route / maxpool / upsample) の
/// レコードはデフォルト値で初期化され、後続のディレクティブは該当する
/// キーだけを上書きします。未知の種別は `name` エントリだけで初期化され、
/// 後続のディレクティブをそのまま受け入れます。
///
/// # Args
/// * `document` - `\n` 区切りのcfgテキスト
///
/// # Return
/// * 文書内の出現順に並んだレイヤレコードの列
///
/// # Errors
/// * `CfgError::MalformedDirective` - 空行・コメント・ヘッダ以外の行に `=` がない場合
pub fn parse(document: &str) -> Result<Vec<LayerRecord>, CfgError> {
    let mut records = Vec::new();

    // 最初のセクションヘッダが現れるまでは空のレコードを保持する
    let mut current = LayerRecord::new();

    for (idx, raw) in document.split('\n').enumerate() {
        let line = raw.to_lowercase();
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            // セクションヘッダ: ここまでのレコードを確定して次のレイヤに移る
            let layer = line[1..line.len() - 1].trim();
            trace!("line {}: section [{}]", idx + 1, layer);
            records.push(mem::replace(&mut current, defaults::seed_record(layer)));
        } else {
            // ディレクティブ: 最初の `=` だけでキーと値に分割する
            let (key, value) =
                line.split_once('=')
                    .ok_or_else(|| CfgError::MalformedDirective {
                        line: idx + 1,
                        text: line.to_string(),
                    })?;
            current.set(key.trim(), value.trim());
        }
    }

    // 最後のセクションはヘッダによるフラッシュが起きないため、ここで確定する
    records.push(current);

    // 先頭のプレースホルダを含め、空のレコードを取り除く
    let records: Vec<LayerRecord> = records.into_iter().filter(|r| !r.is_empty()).collect();
    debug!("parsed {} layer records", records.len());

    Ok(records)
}

/// cfgファイルを読み込んで解析します。
///
/// # Args
/// * `path` - cfgファイルへのパス
///
/// # Return
/// * 文書内の出現順に並んだレイヤレコードの列
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<LayerRecord>> {
    let path = path.as_ref();
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read cfg file: {}", path.display()))?;
    Ok(parse(&document)?)
}
