//! Template file contents

/// Entry point (`index.js`)
pub const ENTRY_POINT_JS: &str = r#"import app from "./src/app.js";

const PORT = process.env.PORT || 3000;
app.listen(PORT, () => console.log(`🚀 Server running on port ${PORT}`));
"#;

/// Entry point (`index.ts`)
pub const ENTRY_POINT_TS: &str = r#"import app from "./src/app";

const PORT = process.env.PORT || 3000;
app.listen(PORT, () => console.log(`🚀 Server running on port ${PORT}`));
"#;

/// Application composition (`src/app.js`)
pub const APP_JS: &str = r#"import express from "express";
import router from "./routes/index.js";
import logger from "./middlewares/logger.js";

const app = express();
app.use(express.json());
app.use(logger);
app.use("/", router);

export default app;
"#;

/// Application composition (`src/app.ts`)
pub const APP_TS: &str = r#"import express from "express";
import router from "./routes/index";
import logger from "./middlewares/logger";

const app = express();
app.use(express.json());
app.use(logger);
app.use("/", router);

export default app;
"#;

/// Router (`src/routes/index.js`)
pub const ROUTER_JS: &str = r#"import express from "express";
import { homeController } from "../controllers/home.js";

const router = express.Router();
router.get("/", homeController);

export default router;
"#;

/// Router (`src/routes/index.ts`)
pub const ROUTER_TS: &str = r#"import express from "express";
import { homeController } from "../controllers/home";

const router = express.Router();
router.get("/", homeController);

export default router;
"#;

/// Home controller (`src/controllers/home.js`)
pub const CONTROLLER_JS: &str = r#"export const homeController = (req, res) => {
  res.json({ message: "Hello from Express + JavaScript!" });
};
"#;

/// Home controller (`src/controllers/home.ts`)
pub const CONTROLLER_TS: &str = r#"import { Request, Response } from "express";

export const homeController = (req: Request, res: Response) => {
  res.json({ message: "Hello from Express + TypeScript!" });
};
"#;

/// Request logger (`src/middlewares/logger.js`)
pub const MIDDLEWARE_JS: &str = r"const logger = (req, res, next) => {
  console.log(`[LOG] ${req.method} ${req.url}`);
  next();
};

export default logger;
";

/// Request logger (`src/middlewares/logger.ts`)
pub const MIDDLEWARE_TS: &str = r#"import { Request, Response, NextFunction } from "express";

const logger = (req: Request, res: Response, next: NextFunction) => {
  console.log(`[LOG] ${req.method} ${req.url}`);
  next();
};

export default logger;
"#;

/// .gitignore, shared by both languages
pub const GITIGNORE: &str = r"node_modules
dist
.env
.DS_Store
npm-debug.log*
";

/// README.md template
///
/// Rendered with handlebars. Context keys: `package_name`, `language`,
/// `ext`, `typescript`, `cd_target`.
pub const README_MD: &str = r"# {{package_name}}

A simple Express {{language}} starter generated with `create-express-app`.

## 🚀 Folder Structure
```
.
 ├── src/
 │   ├── routes/
 │   │   └── index.{{ext}}
 │   ├── controllers/
 │   │   └── home.{{ext}}
 │   ├── middlewares/
 │   │   └── logger.{{ext}}
 │   └── app.{{ext}}
 ├── index.{{ext}}
 ├── package.json
{{#if typescript}} ├── tsconfig.json
{{/if}} ├── .gitignore
 └── README.md
```

## 🧰 Quick Start
```bash
cd {{cd_target}}
npm install
npm run dev
```
";
