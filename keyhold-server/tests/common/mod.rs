use std::net::SocketAddr;
use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bytes::Bytes;
use futures_util::{stream, StreamExt};
use keyhold_storage::FileStore;
use secp256k1::{Keypair, Message, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use tokio::net::TcpListener;

pub struct TestServer {
    pub url: String,
    #[allow(dead_code)]
    pub addr: SocketAddr,
    /// Handle to the backing store, for seeding files outside the write
    /// policy (reads are public for any stored path).
    pub store: Arc<dyn FileStore>,
}

impl TestServer {
    pub async fn start() -> Self {
        let config = keyhold_server::config::Config {
            host: "127.0.0.1".into(),
            port: 0, // OS assigns port
            storage: keyhold_server::config::StorageConfig {
                backend: "memory".into(),
                root: String::new(),
            },
        };

        let state = keyhold_server::state::AppState::new(&config).await.unwrap();
        let store = state.store.clone();
        let app = keyhold_server::routes::router(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give server a moment to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            url: format!("http://{addr}"),
            addr,
            store,
        }
    }

    pub async fn seed(&self, path: &str, content: &[u8]) {
        let body = stream::iter(vec![Ok(Bytes::copy_from_slice(content))]).boxed();
        self.store.put(path, body).await.unwrap();
    }
}

/// A test identity: a fixed secp256k1 keypair and its x-only pubkey hex.
pub struct TestIdentity {
    secp: Secp256k1<secp256k1::All>,
    keypair: Keypair,
    pub pubkey: String,
}

impl TestIdentity {
    pub fn from_secret(secret: [u8; 32]) -> Self {
        let secp = Secp256k1::new();
        let keypair = Keypair::from_secret_key(&secp, &SecretKey::from_slice(&secret).unwrap());
        let (xonly, _) = keypair.x_only_public_key();
        let pubkey = hex::encode(xonly.serialize());
        Self {
            secp,
            keypair,
            pubkey,
        }
    }

    /// Build a valid `authorization` header value: `Nostr <base64(event)>`.
    pub fn auth_header(&self) -> String {
        let created_at = 1_700_000_000i64;
        let kind = 27_235u32;
        let tags: Vec<Vec<String>> = vec![];
        let canonical =
            serde_json::json!([0, self.pubkey, created_at, kind, tags, ""]).to_string();
        let digest: [u8; 32] = Sha256::digest(canonical.as_bytes()).into();
        let sig = self
            .secp
            .sign_schnorr_no_aux_rand(&Message::from_digest(digest), &self.keypair);

        let event = serde_json::json!({
            "id": hex::encode(digest),
            "pubkey": self.pubkey,
            "created_at": created_at,
            "kind": kind,
            "tags": tags,
            "content": "",
            "sig": hex::encode(sig.serialize()),
        });
        format!("Nostr {}", BASE64.encode(event.to_string()))
    }

    /// Same event, signature flipped: syntactically valid, cryptographically
    /// not.
    pub fn corrupted_auth_header(&self) -> String {
        let header = self.auth_header();
        let encoded = header.strip_prefix("Nostr ").unwrap();
        let raw = BASE64.decode(encoded).unwrap();
        let mut event: serde_json::Value = serde_json::from_slice(&raw).unwrap();

        let sig = event["sig"].as_str().unwrap();
        let mut sig_bytes = hex::decode(sig).unwrap();
        sig_bytes[0] ^= 0xff;
        event["sig"] = serde_json::Value::String(hex::encode(sig_bytes));

        format!("Nostr {}", BASE64.encode(event.to_string()))
    }
}
