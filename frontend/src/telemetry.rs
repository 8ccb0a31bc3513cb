//! 日志初始化
//!
//! `tracing` 事件在浏览器中写入 `console.log`，原生目标（测试）写入 stderr。

use std::io::{self, Write};

use tracing_subscriber::fmt::MakeWriter;

/// 单条日志的缓冲，Drop 时整体输出
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        emit(line.trim_end());
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(line));
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &str) {
    let _ = writeln!(io::stderr(), "{line}");
}

#[derive(Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// 安装全局订阅者；重复调用无副作用
pub fn init(level: tracing::Level) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%level, "telemetry ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::default();
        writer.write_all(b"hello ").unwrap();
        writer.write_all(b"world\n").unwrap();
        assert_eq!(writer.buf, b"hello world\n");

        writer.flush().unwrap();
        assert!(writer.buf.is_empty());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(tracing::Level::INFO);
        init(tracing::Level::DEBUG);
    }
}
