use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The encryption environment a tracked file belongs to.
//
// // 被跟踪文件所属的加密环境。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvType {
    /// The file is not encrypted.
    //
    // // 文件未加密。
    Plaintext,
    /// The file is encrypted with the store-level key.
    //
    // // 文件使用存储级密钥加密。
    Store,
    /// The file is encrypted with the data-level key.
    //
    // // 文件使用数据级密钥加密。
    Data,
}

/// 解析 EncryptionSettings 字符串时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum SettingsParseError {
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// 一个不透明的加密参数载荷的类型安全包装器。
///
/// 注册表不解释其内容（它属于调用方的领域，例如密钥标识、
/// nonce 等），只作为一个整体存储、复制和删除。
/// 在 JSON 中编码/解码为十六进制字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncryptionSettings(Vec<u8>);

impl EncryptionSettings {
    /// 从原始字节创建一个 `EncryptionSettings`。
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// 以字节切片的形式返回原始载荷。
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 载荷是否为空（例如明文文件）。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 将载荷编码为十六进制字符串。
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// 从十六进制字符串解码回 `EncryptionSettings`。
    pub fn from_hex(s: &str) -> Result<Self, SettingsParseError> {
        Ok(Self(hex::decode(s)?))
    }
}

/// 允许 `EncryptionSettings::from(vec![...])`
impl From<Vec<u8>> for EncryptionSettings {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// 允许 `println!("{}", settings)`
impl fmt::Display for EncryptionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 允许 `EncryptionSettings::from_str("...")`
impl FromStr for EncryptionSettings {
    type Err = SettingsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// --- Serde (JSON) 序列化/反序列化 ---

/// 序列化为十六进制字符串
impl Serialize for EncryptionSettings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// 从十六进制字符串反序列化
impl<'de> Deserialize<'de> for EncryptionSettings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SettingsVisitor;

        impl<'de> serde::de::Visitor<'de> for SettingsVisitor {
            type Value = EncryptionSettings;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hex-encoded settings string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                EncryptionSettings::from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(SettingsVisitor)
    }
}

/// 一个被跟踪文件的注册表条目。
///
/// 每个条目在同一时刻恰好属于一个注册表键。条目是独占拥有的
/// 值类型：硬链接语义要求的是独立副本而不是共享别名，否则
/// 一个路径的后续变更会悄悄影响另一个路径。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// 产生该文件的加密环境。
    pub env_type: EnvType,
    /// 不透明的加密参数载荷。
    pub encryption_settings: EncryptionSettings,
}

impl FileEntry {
    /// 创建一个新的条目。
    pub fn new(env_type: EnvType, encryption_settings: impl Into<EncryptionSettings>) -> Self {
        Self {
            env_type,
            encryption_settings: encryption_settings.into(),
        }
    }

    /// 创建一个明文条目（空载荷）。
    pub fn plaintext() -> Self {
        Self {
            env_type: EnvType::Plaintext,
            encryption_settings: EncryptionSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_hex_roundtrip() {
        let settings = EncryptionSettings::new(vec![0xDE, 0xAD, 0xBE, 0xEF]);
        let s = settings.to_hex();
        assert_eq!(s, "deadbeef");

        let parsed = EncryptionSettings::from_str(&s).expect("Parsing should succeed");
        assert_eq!(settings, parsed);
        assert_eq!(parsed.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_settings_rejects_invalid_hex() {
        assert!(EncryptionSettings::from_hex("zz").is_err());
        assert!(EncryptionSettings::from_hex("abc").is_err()); // 奇数长度
    }

    #[test]
    fn test_serialize_file_entry() {
        let entry = FileEntry::new(EnvType::Data, vec![0x01, 0x02]);

        let json_string = serde_json::to_string(&entry).unwrap();
        let json_value: serde_json::Value = serde_json::from_str(&json_string).unwrap();

        assert_eq!(json_value["envType"].as_str(), Some("data"));
        assert_eq!(json_value["encryptionSettings"].as_str(), Some("0102"));
    }

    #[test]
    fn test_deserialize_file_entry() {
        let json = r#"
        {
            "envType": "store",
            "encryptionSettings": "cafe"
        }
        "#;
        let entry: FileEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.env_type, EnvType::Store);
        assert_eq!(entry.encryption_settings.as_bytes(), &[0xCA, 0xFE]);
    }

    #[test]
    fn test_plaintext_entry_roundtrip() {
        let entry = FileEntry::plaintext();
        let json_string = serde_json::to_string(&entry).unwrap();
        let back: FileEntry = serde_json::from_str(&json_string).unwrap();

        assert_eq!(entry, back);
        assert!(back.encryption_settings.is_empty());
    }
}
