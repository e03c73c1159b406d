//! レイヤレコードを定義するモジュール

use std::fmt;

use indexmap::IndexMap;

/// cfgの1セクション分のパラメータを保持する構造体
///
/// キーと値はすべて小文字化された文字列で、挿入順が保持されます。
/// 数値パラメータも文字列のまま保持し、型変換は利用側に委ねます。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerRecord {
    params: IndexMap<String, String>,
}

impl LayerRecord {
    /// 空のレコードを作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// `name` エントリだけを持つレコードを作成します。
    ///
    /// # Args
    /// * `name` - レイヤ種別名
    ///
    /// # Return
    /// * 新たなLayerRecordインスタンス
    pub fn with_name(name: &str) -> Self {
        let mut record = Self::new();
        record.set("name", name);
        record
    }

    /// レイヤ種別名 (`name` エントリ) を取得します。
    pub fn name(&self) -> Option<&str> {
        self.get("name")
    }

    /// 指定したキーの値を取得します。
    ///
    /// # Args
    /// * `key` - パラメータ名 (小文字)
    ///
    /// # Return
    /// * パラメータの値。エントリがない場合は `None`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// キーに値を設定します。既存のエントリは上書きされます。
    ///
    /// # Args
    /// * `key` - パラメータ名
    /// * `value` - パラメータの値
    pub fn set(&mut self, key: &str, value: &str) {
        self.params.insert(key.to_string(), value.to_string());
    }

    /// エントリ数を返します。
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// エントリが1つもないかどうかを返します。
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// エントリを挿入順に走査するイテレータを返します。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LayerRecord {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}

impl fmt::Display for LayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name().unwrap_or(""))?;
        for (key, value) in self.iter().filter(|(key, _)| *key != "name") {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_name_holds_single_entry() {
        let record = LayerRecord::with_name("net");
        assert_eq!(record.len(), 1);
        assert_eq!(record.name(), Some("net"));
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let mut record = LayerRecord::with_name("maxpool");
        record.set("stride", "2");
        record.set("stride", "1");
        assert_eq!(record.get("stride"), Some("1"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let record: LayerRecord = [("name", "upsample"), ("stride", "1"), ("extra", "x")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["name", "stride", "extra"]);
    }

    #[test]
    fn display_renders_directive_form() {
        let record: LayerRecord = [("name", "maxpool"), ("size", "2"), ("stride", "2")]
            .into_iter()
            .collect();
        assert_eq!(record.to_string(), "[maxpool] size=2 stride=2");
    }
}
