//! Hardcoded manifest bodies for the `pv` and `init` commands.
//!
//! These bypass the template pipeline entirely: no parameters, fixed
//! filenames, verbatim content.

/// Body written by the `pv` command to `pv.yaml`.
pub const PV_MANIFEST: &str = "\
apiVersion: v1
kind: PersistentVolume
metadata:
  name: my-pv
spec:
  capacity:
    storage: 1Gi
  accessModes:
    - ReadWriteOnce
  hostPath:
    path: \"/mnt/data\"
";

const INIT_DEPLOYMENT: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: my-deployment
spec:
  replicas: 2
  selector:
    matchLabels:
      app: my-app
  template:
    metadata:
      labels:
        app: my-app
    spec:
      containers:
      - name: my-container
        image: my-image
";

const INIT_SERVICE: &str = "\
apiVersion: v1
kind: Service
metadata:
  name: my-service
spec:
  selector:
    app: my-app
  ports:
  - protocol: TCP
    port: 80
    targetPort: 80
";

const INIT_PVC: &str = "\
apiVersion: v1
kind: PersistentVolumeClaim
metadata:
  name: my-pvc
spec:
  accessModes:
    - ReadWriteOnce
  resources:
    requests:
      storage: 1Gi
";

/// Filename/body pairs written by the `init` command.
pub const INIT_MANIFESTS: [(&str, &str); 4] = [
    ("deployment.yaml", INIT_DEPLOYMENT),
    ("service.yaml", INIT_SERVICE),
    ("pv.yaml", PV_MANIFEST),
    ("pvc.yaml", INIT_PVC),
];
