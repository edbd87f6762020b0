//! kubectl-backed cluster broker
//!
//! Shells out to the `kubectl` CLI for context switching, worker-pod
//! provisioning, config-map/secret reads, and in-pod SQL execution. SQL is
//! staged into the pod over stdin and fed to the `mysql` client from the
//! staged file, so statement text never passes through a local shell.

use std::io::Write;
use std::process::{Child, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine;

use crate::domain::ports::{ClusterBroker, ContextToken, DbCredentials, SqlExecution};
use crate::error::{ShipctlError, ShipctlResult};

/// Name of the ephemeral SQL worker pod.
const WORKER_POD: &str = "temp-mysql-client";

/// Bounded wait for worker-pod readiness.
const POD_READY_TIMEOUT: &str = "60s";

/// Cluster broker backed by the `kubectl` binary.
pub struct KubectlBroker {
    program: String,
}

impl KubectlBroker {
    pub fn new() -> Self {
        Self {
            program: "kubectl".to_string(),
        }
    }

    /// Override the kubectl binary (used by tests and unusual PATHs).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    /// Run kubectl, requiring exit 0; returns trimmed stdout.
    fn run(&self, args: &[&str], what: &str) -> ShipctlResult<String> {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ShipctlError::cluster(format!("{what}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShipctlError::cluster(format!(
                "{what}: {}",
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Spawn a kubectl read with piped stdout, for concurrent collection.
    fn spawn_read(&self, args: &[&str], what: &str) -> ShipctlResult<(Child, String)> {
        let child = self
            .command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ShipctlError::cluster(format!("{what}: {e}")))?;
        Ok((child, what.to_string()))
    }

    /// Join a spawned read, requiring exit 0 and non-empty output.
    fn join_read((child, what): (Child, String)) -> ShipctlResult<String> {
        let output = child
            .wait_with_output()
            .map_err(|e| ShipctlError::cluster(format!("{what}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShipctlError::cluster(format!("{what}: {}", stderr.trim())));
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if value.is_empty() {
            return Err(ShipctlError::cluster(format!("{what}: value is empty")));
        }
        Ok(value)
    }

    /// Run a shell line inside the worker pod, streaming `stdin_data` to it.
    fn exec_in_pod(
        &self,
        namespace: &str,
        pod: &str,
        shell_line: &str,
        stdin_data: Option<&[u8]>,
        what: &str,
    ) -> ShipctlResult<String> {
        let mut cmd = self.command(&[
            "exec",
            "-i",
            "-n",
            namespace,
            pod,
            "--",
            "sh",
            "-c",
            shell_line,
        ]);
        cmd.stdin(if stdin_data.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| ShipctlError::cluster(format!("{what}: {e}")))?;

        if let Some(data) = stdin_data {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| ShipctlError::cluster(format!("{what}: stdin unavailable")))?;
            stdin
                .write_all(data)
                .map_err(|e| ShipctlError::cluster(format!("{what}: {e}")))?;
            // Dropping stdin closes the pipe so the remote `cat` terminates.
        }

        let output = child
            .wait_with_output()
            .map_err(|e| ShipctlError::cluster(format!("{what}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShipctlError::cluster(format!("{what}: {}", stderr.trim())));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn staged_file_name() -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        format!("/tmp/shipctl-{}-{nanos}.sql", std::process::id())
    }
}

impl Default for KubectlBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterBroker for KubectlBroker {
    fn current_context(&self) -> ShipctlResult<String> {
        let context = self.run(
            &["config", "current-context"],
            "failed to read current kubectl context",
        )?;
        if context.is_empty() {
            return Err(ShipctlError::cluster("no current kubectl context is set"));
        }
        Ok(context)
    }

    fn switch_context(&self, context: &str) -> ShipctlResult<ContextToken> {
        let original = self.current_context()?;
        self.run(
            &["config", "use-context", context],
            &format!("failed to switch context to {context}"),
        )?;
        Ok(ContextToken::new(original))
    }

    fn restore_context(&self, token: ContextToken) {
        let result = self.run(
            &["config", "use-context", token.original()],
            &format!("failed to restore context {}", token.original()),
        );
        if let Err(e) = result {
            eprintln!("⚠ could not restore kubectl context: {e}");
        }
    }

    fn ensure_worker_pod(&self, namespace: &str) -> ShipctlResult<String> {
        let exists = self
            .command(&["get", "pod", "-n", namespace, WORKER_POD])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ShipctlError::cluster(format!("failed to query pod {WORKER_POD}: {e}")))?
            .success();

        if exists {
            return Ok(WORKER_POD.to_string());
        }

        let manifest = worker_pod_manifest(namespace);
        let mut apply = self
            .command(&["apply", "-n", namespace, "-f", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ShipctlError::cluster(format!("failed to create pod {WORKER_POD}: {e}")))?;

        apply
            .stdin
            .take()
            .ok_or_else(|| ShipctlError::cluster("kubectl apply: stdin unavailable"))?
            .write_all(manifest.as_bytes())
            .map_err(|e| ShipctlError::cluster(format!("failed to create pod {WORKER_POD}: {e}")))?;

        let output = apply
            .wait_with_output()
            .map_err(|e| ShipctlError::cluster(format!("failed to create pod {WORKER_POD}: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShipctlError::cluster(format!(
                "failed to create pod {WORKER_POD}: {}",
                stderr.trim()
            )));
        }

        self.run(
            &[
                "wait",
                "--for=condition=Ready",
                &format!("pod/{WORKER_POD}"),
                "-n",
                namespace,
                &format!("--timeout={POD_READY_TIMEOUT}"),
            ],
            &format!("pod {WORKER_POD} did not become ready"),
        )?;

        Ok(WORKER_POD.to_string())
    }

    fn credentials(
        &self,
        namespace: &str,
        config_map: &str,
        secret: &str,
    ) -> ShipctlResult<DbCredentials> {
        let config_key = |key: &str| {
            (
                vec![
                    "get".to_string(),
                    "configmap".to_string(),
                    "-n".to_string(),
                    namespace.to_string(),
                    config_map.to_string(),
                    "-o".to_string(),
                    format!("jsonpath={{.data.{key}}}"),
                ],
                format!("failed to read {namespace}/{config_map}.{key}"),
            )
        };

        let (secret_args, secret_what) = (
            vec![
                "get".to_string(),
                "secret".to_string(),
                "-n".to_string(),
                namespace.to_string(),
                secret.to_string(),
                "-o".to_string(),
                "jsonpath={.data.DB_PASSWORD}".to_string(),
            ],
            format!("failed to read {namespace}/{secret}.DB_PASSWORD"),
        );

        // Spawn all five lookups, then join; any failure fails the unit.
        let mut reads = Vec::new();
        for (args, what) in [
            config_key("DB_HOST"),
            config_key("DB_USER"),
            config_key("DB_PORT"),
            config_key("DB_NAME"),
            (secret_args, secret_what),
        ] {
            let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
            reads.push(self.spawn_read(&arg_refs, &what)?);
        }

        // Join every child before failing so no lookup is left dangling.
        let mut values = Vec::with_capacity(reads.len());
        let mut first_error = None;
        for read in reads {
            match Self::join_read(read) {
                Ok(value) => values.push(value),
                Err(e) if first_error.is_none() => first_error = Some(e),
                Err(_) => {}
            }
        }
        if let Some(e) = first_error {
            return Err(e);
        }

        let encoded_password = values.pop().expect("five reads were spawned");
        let password_bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded_password.as_bytes())
            .map_err(|e| {
                ShipctlError::cluster(format!("failed to decode {namespace}/{secret}: {e}"))
            })?;
        let password = String::from_utf8(password_bytes).map_err(|e| {
            ShipctlError::cluster(format!("failed to decode {namespace}/{secret}: {e}"))
        })?;

        let name = values.pop().expect("five reads were spawned");
        let port = values.pop().expect("five reads were spawned");
        let user = values.pop().expect("five reads were spawned");
        let host = values.pop().expect("five reads were spawned");

        Ok(DbCredentials {
            host,
            user,
            password,
            port,
            name,
        })
    }

    fn exec_sql(&self, exec: &SqlExecution) -> ShipctlResult<String> {
        let staged = Self::staged_file_name();

        self.exec_in_pod(
            &exec.namespace,
            &exec.pod_name,
            &format!("cat > {staged}"),
            Some(exec.sql.as_bytes()),
            "failed to stage SQL in worker pod",
        )?;

        let mysql_line = format!(
            "mysql --default-character-set=utf8mb4 -h {host} -P {port} -u {user} -p{password} {name} < {staged}",
            host = shell_quote(&exec.credentials.host),
            port = shell_quote(&exec.credentials.port),
            user = shell_quote(&exec.credentials.user),
            password = shell_quote(&exec.credentials.password),
            name = shell_quote(&exec.credentials.name),
        );

        let result = self.exec_in_pod(
            &exec.namespace,
            &exec.pod_name,
            &mysql_line,
            None,
            "SQL execution failed",
        );

        // Best-effort cleanup of the staged file on every path.
        let _ = self
            .command(&[
                "exec",
                "-n",
                &exec.namespace,
                &exec.pod_name,
                "--",
                "rm",
                "-f",
                &staged,
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        result
    }
}

/// Minimal worker-pod spec: a mysql image kept alive by sleep.
fn worker_pod_manifest(namespace: &str) -> String {
    format!(
        "apiVersion: v1\n\
         kind: Pod\n\
         metadata:\n\
        \x20 name: {WORKER_POD}\n\
        \x20 namespace: {namespace}\n\
         spec:\n\
        \x20 containers:\n\
        \x20 - name: mysql-client\n\
        \x20   image: mysql:8.0\n\
        \x20   command: [\"sleep\", \"36000\"]\n\
        \x20 restartPolicy: Never\n"
    )
}

/// Quote a value for the in-pod shell (simple escaping).
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
