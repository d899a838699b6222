//! 书籍定制选项
//!
//! 只保存尺寸、字体、配色三个选项的 id；具体样式目录属于展示层

use serde::{Deserialize, Serialize};

/// 定义一个以字符串 id 持久化的选项枚举
macro_rules! selection_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            pub fn from_str(s: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == s)
            }

            /// 未知 id 回退到默认值
            pub fn from_str_or_default(s: &str) -> Self {
                Self::from_str(s).unwrap_or_default()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

selection_enum!(
    /// 开本
    BookSize {
        Portrait => "portrait",
        Square => "square",
        Landscape => "landscape",
        Compact => "compact",
    }
);

selection_enum!(
    /// 字体风格
    FontStyle {
        Classic => "classic",
        Minimal => "minimal",
        Elegant => "elegant",
        Vintage => "vintage",
    }
);

selection_enum!(
    /// 配色方案
    ColorScheme {
        Heritage => "heritage",
        Midnight => "midnight",
        Parchment => "parchment",
        Botanical => "botanical",
    }
);

/// 当前的定制选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookCustomization {
    pub size: BookSize,
    pub font: FontStyle,
    pub color: ColorScheme,
}
