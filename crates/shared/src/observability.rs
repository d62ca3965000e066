//! # ログ出力の初期化
//!
//! プロセス起動時に一度だけ [`init_tracing`] を呼び、グローバル subscriber を登録する。
//!
//! | 環境変数 | 既定値 | 意味 |
//! |----------|--------|------|
//! | `LOG_FORMAT` | `pretty` | `json` なら 1 行 1 イベントの JSON |
//! | `RUST_LOG` | [`DEFAULT_FILTER`] | `EnvFilter` のディレクティブ |

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,dogpark=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   Json,
   #[default]
   Pretty,
}

impl LogFormat {
   /// `LOG_FORMAT` の値を解釈する
   ///
   /// 未設定は [`Pretty`](LogFormat::Pretty)。前後の空白と大文字小文字は区別しない。
   /// 解釈できない値は `Err` に元の文字列を入れて返す。
   pub fn from_setting(value: Option<&str>) -> Result<Self, String> {
      let Some(raw) = value else {
         return Ok(Self::default());
      };
      match raw.trim().to_ascii_lowercase().as_str() {
         "json" => Ok(Self::Json),
         "pretty" => Ok(Self::Pretty),
         _ => Err(raw.to_string()),
      }
   }
}

/// グローバル subscriber を登録する
///
/// `tracing_error::ErrorLayer` も登録するので、ストアエラーの `SpanTrace` に
/// リクエストのスパンが残る。`LOG_FORMAT` が不正なら pretty で出力し、
/// 初期化後にその旨を警告する。
#[cfg(feature = "observability")]
pub fn init_tracing() {
   use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let setting = std::env::var("LOG_FORMAT").ok();
   let (format, rejected) = match LogFormat::from_setting(setting.as_deref()) {
      Ok(format) => (format, None),
      Err(raw) => (LogFormat::default(), Some(raw)),
   };

   let filter =
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

   let output = match format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(filter)
      .with(output)
      .with(tracing_error::ErrorLayer::default())
      .init();

   if let Some(raw) = rejected {
      tracing::warn!(log_format = %raw, "LOG_FORMAT を解釈できないため pretty で出力します");
   }
}
