//! Line-delimited stdio transport.
//!
//! One JSON-RPC message per line in, one response per line out. Requests
//! are processed strictly in arrival order.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use super::handler::RequestHandler;
use super::protocol::{JsonRpcRequest, JsonRpcResponse, RpcError};

pub struct Server<R, W> {
    reader: R,
    writer: W,
    handler: RequestHandler,
}

impl<R: BufRead, W: Write> Server<R, W> {
    pub fn new(reader: R, writer: W, handler: RequestHandler) -> Self {
        Self {
            reader,
            writer,
            handler,
        }
    }

    /// Serve until the input reaches end of file.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = Vec::new();
        let mut handled = 0usize;

        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }

            let response = match std::str::from_utf8(&line) {
                Ok(text) => {
                    let message = text.trim();
                    if message.is_empty() {
                        continue;
                    }
                    self.process_line(message)
                }
                Err(e) => {
                    log::warn!("MESSAGE_PARSE_FAILED error={}", e);
                    Some(JsonRpcResponse::failure(
                        Value::Null,
                        RpcError::parse_error(&e.to_string()),
                    ))
                }
            };

            if let Some(response) = response {
                self.send(&response)?;
            }
            handled += 1;
        }

        log::info!("SERVER_STOPPED reason=eof messages={}", handled);
        Ok(())
    }

    /// Decode one line and produce the response, if any.
    pub fn process_line(&self, message: &str) -> Option<JsonRpcResponse> {
        let raw: Value = match serde_json::from_str(message) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("MESSAGE_PARSE_FAILED error={}", e);
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::parse_error(&e.to_string()),
                ));
            }
        };

        let id = raw.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(raw) {
            Ok(request) => self.handler.handle(request),
            Err(e) => {
                log::warn!("MESSAGE_INVALID error={}", e);
                Some(JsonRpcResponse::failure(
                    id.unwrap_or(Value::Null),
                    RpcError::invalid_request(&e.to_string()),
                ))
            }
        }
    }

    fn send(&mut self, response: &JsonRpcResponse) -> io::Result<()> {
        let encoded = match serde_json::to_string(response) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::error!("RESPONSE_ENCODE_FAILED error={}", e);
                let fallback = JsonRpcResponse::failure(
                    response.id.clone(),
                    RpcError::internal_error(&e.to_string()),
                );
                serde_json::to_string(&fallback).map_err(io::Error::other)?
            }
        };
        self.writer.write_all(encoded.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::server::protocol::{INVALID_REQUEST, PARSE_ERROR};
    use crate::storage::InMemoryFileStore;
    use crate::tools::ToolContext;
    use serde_json::json;
    use std::io::Cursor;

    fn server(input: &str) -> Server<Cursor<Vec<u8>>, Vec<u8>> {
        let handler = RequestHandler::new(
            ServerConfig::default(),
            ToolContext::in_memory(&InMemoryFileStore::new()),
        );
        Server::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), handler)
    }

    fn responses(output: Vec<u8>) -> Vec<Value> {
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_parse_error() {
        let response = server("").process_line("{oops").unwrap();
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[test]
    fn test_invalid_request_keeps_id() {
        let response = server("").process_line(r#"{"jsonrpc": "2.0", "id": 9}"#).unwrap();
        assert_eq!(response.id, json!(9));
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }

    #[test]
    fn test_run_until_eof() {
        let input = concat!(
            r#"{"jsonrpc": "2.0", "id": 1, "method": "ping"}"#,
            "\n\n",
            r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/list"}"#,
            "\n"
        );
        let mut server = server(input);
        server.run().unwrap();

        let out = responses(server.into_writer());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], json!({"jsonrpc": "2.0", "id": 1, "result": {}}));
        assert_eq!(out[1]["id"], json!(2));
        assert_eq!(out[1]["result"]["tools"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_invalid_utf8_line_keeps_session_alive() {
        let mut input = Vec::new();
        input.extend_from_slice(br#"{"jsonrpc": "2.0", "id": 1, "method": "ping"}"#);
        input.extend_from_slice(b"\n{\"jsonrpc\": \"2.0\", \"id\": \xff}\n");
        input.extend_from_slice(br#"{"jsonrpc": "2.0", "id": 3, "method": "ping"}"#);
        input.push(b'\n');

        let handler = RequestHandler::new(
            ServerConfig::default(),
            ToolContext::in_memory(&InMemoryFileStore::new()),
        );
        let mut server = Server::new(Cursor::new(input), Vec::new(), handler);
        server.run().unwrap();

        let out = responses(server.into_writer());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0]["id"], json!(1));
        assert_eq!(out[1]["id"], Value::Null);
        assert_eq!(out[1]["error"]["code"], json!(PARSE_ERROR));
        assert_eq!(out[2], json!({"jsonrpc": "2.0", "id": 3, "result": {}}));
    }

    #[test]
    fn test_null_id_is_answered() {
        let response = server("")
            .process_line(r#"{"jsonrpc": "2.0", "id": null, "method": "ping"}"#)
            .unwrap();
        assert_eq!(response.id, Value::Null);
        assert_eq!(response.result, Some(json!({})));
    }
}
