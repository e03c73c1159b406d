//! 既知レイヤ種別のデフォルト値テーブルを定義するモジュール

use crate::layer_record::LayerRecord;

/// `[convolutional]` のデフォルト値
const CONVOLUTIONAL: &[(&str, &str)] = &[
    ("name", "convolutional"),
    ("batch_normalize", "0"),
    ("filters", "1"),
    ("size", "1"),
    ("stride", "1"),
    ("pad", "1"),
    ("activation", "linear"),
];

/// `[route]` のデフォルト値
const ROUTE: &[(&str, &str)] = &[
    ("name", "route"),
    ("groups", "0"),
    ("group_id", "0"),
    ("layers", "-1"),
];

/// `[maxpool]` のデフォルト値
const MAXPOOL: &[(&str, &str)] = &[("name", "maxpool"), ("size", "2"), ("stride", "2")];

/// `[upsample]` のデフォルト値
const UPSAMPLE: &[(&str, &str)] = &[("name", "upsample"), ("stride", "1")];

/// セクションヘッダ名から新しいアキュムレータを作成します。
///
/// 既知のレイヤ種別はデフォルト値テーブルのコピーで初期化し、
/// 未知の種別は `name` エントリだけを持つレコードで初期化します。
///
/// # Args
/// * `layer` - セクションヘッダ内のレイヤ種別名 (小文字化・トリム済み)
///
/// # Return
/// * デフォルト値が設定された新たなLayerRecordインスタンス
pub(crate) fn seed_record(layer: &str) -> LayerRecord {
    let defaults = match layer {
        "convolutional" => CONVOLUTIONAL,
        "route" => ROUTE,
        "maxpool" => MAXPOOL,
        "upsample" => UPSAMPLE,
        _ => return LayerRecord::with_name(layer),
    };
    defaults.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_layer_is_seeded_from_table() {
        let record = seed_record("route");
        assert_eq!(record.name(), Some("route"));
        assert_eq!(record.get("groups"), Some("0"));
        assert_eq!(record.get("group_id"), Some("0"));
        assert_eq!(record.get("layers"), Some("-1"));
        assert_eq!(record.len(), 4);
    }

    #[test]
    fn unknown_layer_is_seeded_with_name_only() {
        let record = seed_record("yolo");
        assert_eq!(record.len(), 1);
        assert_eq!(record.name(), Some("yolo"));
    }

    #[test]
    fn seeded_records_are_independent_copies() {
        let mut first = seed_record("maxpool");
        first.set("stride", "1");
        let second = seed_record("maxpool");
        assert_eq!(second.get("stride"), Some("2"));
    }
}
