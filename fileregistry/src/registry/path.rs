/// 注册表键使用的路径分隔符。
/// 引擎内部的路径统一使用 '/'，与平台无关。
const DIR_SEPARATOR: char = '/';

/// 将一个绝对路径规范化为相对于引擎根目录的注册表键。
///
/// 规则：
/// - 根目录先被清理：反复去掉结尾的分隔符。只有当根目录
///   恰好是文件系统根 "/" 时，清理结果才是空字符串。
/// - 输入去掉结尾分隔符后与清理后的根目录完全相等，
///   说明输入就是根目录本身，返回空字符串。
/// - 输入以 "根目录 + 分隔符" 开头：去掉该前缀，再去掉剩余
///   部分开头的所有分隔符（吸收偶尔出现的双斜杠），返回剩余部分。
/// - 其他情况：与根目录建立不了关系，原样返回，注册表将
///   以原始路径作为键。
///
/// 该函数是纯函数且幂等：对一个已经不再匹配根前缀的键
/// 再次变换，结果不会继续变化。
pub fn transform_path(db_dir: &str, path: &str) -> String {
    let sanitized_root = db_dir.trim_end_matches(DIR_SEPARATOR);

    if path.trim_end_matches(DIR_SEPARATOR) == sanitized_root {
        return String::new();
    }

    let root_with_sep = format!("{}{}", sanitized_root, DIR_SEPARATOR);
    match path.strip_prefix(&root_with_sep) {
        Some(rest) => rest.trim_start_matches(DIR_SEPARATOR).to_string(),
        None => path.to_string(),
    }
}
